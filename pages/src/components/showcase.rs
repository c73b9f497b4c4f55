//! Showcase of pinned users, plus the full users page.

use crate::types::{SiteConfig, SiteUser};
use leptos::prelude::*;

/// Homepage showcase: the `pinned` subset of [`SiteConfig::users`], in their
/// original order, with a "more users" button linking to the users page.
///
/// Renders nothing at all when the config lists no users.
#[component]
pub fn Showcase(config: SiteConfig, language: String) -> impl IntoView {
    if config.users.is_empty() {
        return view! {}.into_any();
    }

    let pinned: Vec<SiteUser> = config
        .users
        .iter()
        .filter(|user| user.pinned)
        .cloned()
        .collect();
    let more_href = config.page_url(&language, "users.html");
    let more_label = format!("More {} Users", config.title);

    view! {
        <div class="showcase-section">
            <h2>"Who is Using This?"</h2>
            <p>"This project is used by all these people"</p>
            <div class="showcase-logos">
                {pinned
                    .into_iter()
                    .map(|user| {
                        view! {
                            <a href=user.info_link>
                                <img src=user.image alt=user.caption.clone() title=user.caption.clone() />
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="more-users">
                <a class="promo-button" href=more_href>
                    {more_label}
                </a>
            </div>
        </div>
    }
    .into_any()
}

/// Full adopter list for `users.html`: every entry, pinned or not, as a
/// captioned logo card.
#[component]
pub fn UsersPage(config: SiteConfig, language: String) -> impl IntoView {
    let heading = format!("Who is Using {}?", config.title);
    let home_href = config.page_url(&language, "index.html");

    view! {
        <div class="users-page">
            <h1>{heading}</h1>
            <p>"Logos link to each project or profile."</p>
            <div class="users-grid">
                {config
                    .users
                    .into_iter()
                    .map(|user| {
                        view! {
                            <div class="user-card">
                                <a href=user.info_link>
                                    <img src=user.image alt=user.caption.clone() title=user.caption.clone() />
                                </a>
                                <span class="user-caption">{user.caption}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <p class="back-home">
                <a href=home_href>"Back to the homepage"</a>
            </p>
        </div>
    }
}

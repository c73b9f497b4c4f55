//! Root document components - the complete HTML pages.

use super::{Description, FeatureCallout, Features, HomeSplash, LearnHow, Showcase, TryOut, UsersPage};
use crate::styles::HOMEPAGE_CSS;
use crate::types::SiteConfig;
use leptos::prelude::*;

/// The complete homepage document: splash banner followed by the content
/// blocks in fixed order, showcase last.
#[component]
pub fn HomeDocument(config: SiteConfig, language: String) -> impl IntoView {
    view! {
        <html lang="en">
            <PageHead title=config.title.clone() />
            <body>
                <HomeSplash config=config.clone() language=language.clone() />
                <main class="main-container">
                    <Features base_url=config.base_url.clone() />
                    <FeatureCallout />
                    <LearnHow base_url=config.base_url.clone() />
                    <TryOut base_url=config.base_url.clone() />
                    <Description base_url=config.base_url.clone() />
                    <Showcase config=config language=language />
                </main>
            </body>
        </html>
    }
}

/// The complete users page document.
#[component]
pub fn UsersDocument(config: SiteConfig, language: String) -> impl IntoView {
    let title = format!("{} - Users", config.title);

    view! {
        <html lang="en">
            <PageHead title=title />
            <body>
                <main class="main-container">
                    <UsersPage config=config language=language />
                </main>
            </body>
        </html>
    }
}

#[component]
fn PageHead(title: String) -> impl IntoView {
    view! {
        <head>
            <meta charset="UTF-8" />
            <meta name="viewport" content="width=device-width, initial-scale=1" />
            <title>{title}</title>
            <style>{HOMEPAGE_CSS}</style>
        </head>
    }
}

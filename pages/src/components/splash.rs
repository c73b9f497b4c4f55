//! Splash banner - the hero section at the top of the homepage.

use crate::types::SiteConfig;
use leptos::prelude::*;

/// Hero section: logo, title, tagline, and the promo button row.
///
/// Links are derived from the config with [`SiteConfig::doc_url`]; the
/// "Projects" button jumps to the `#try` anchor further down the page.
#[component]
pub fn HomeSplash(config: SiteConfig, language: String) -> impl IntoView {
    let logo_src = config.img_url("undraw_monitor.svg");
    let doc1_href = config.doc_url(&language, "doc1.html");
    let doc2_href = config.doc_url(&language, "doc2.html");

    view! {
        <header class="splash">
            <div class="splash-fade">
                <div class="splash-inner">
                    <Logo src=logo_src />
                    <ProjectTitle title=config.title.clone() tagline=config.tagline.clone() />
                    <PromoSection>
                        <PromoButton href="#try" label="Projects" />
                        <PromoButton href=doc1_href label="Example Link" />
                        <PromoButton href=doc2_href label="Example Link 2" />
                    </PromoSection>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Logo(src: String) -> impl IntoView {
    view! {
        <div class="project-logo">
            <img src=src alt="Project Logo" />
        </div>
    }
}

#[component]
fn ProjectTitle(title: String, tagline: String) -> impl IntoView {
    view! {
        <h1 class="project-title">
            {title}
            <small>{tagline}</small>
        </h1>
    }
}

#[component]
fn PromoSection(children: Children) -> impl IntoView {
    view! {
        <div class="promo-section">
            <div class="promo-row">{children()}</div>
        </div>
    }
}

#[component]
fn PromoButton(#[prop(into)] href: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <a class="promo-button" href=href>
            {label}
        </a>
    }
}

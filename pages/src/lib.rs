//! # home-leptos
//!
//! Leptos SSR renderer for a personal homepage.
//!
//! This crate renders a complete static homepage (and its users page) from a
//! typed [`types::SiteConfig`] using [Leptos](https://leptos.dev/)
//! server-side rendering. It is the rendering half of the `homesite`
//! generator, but can be used on its own wherever a config-to-HTML pass is
//! needed.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - pure SSR, no hydration needed
//! - **Component-Based** - splash, content blocks, and showcase are modular
//!   Leptos components
//! - **Type-Safe** - full Rust type safety from config to HTML
//!
//! ## Quick Start
//!
//! ```rust
//! use home_leptos::{render_homepage, types::SiteConfig};
//!
//! let config = SiteConfig {
//!     title: "My Portfolio".into(),
//!     tagline: "Year 2 Computer Engineering @ NUS".into(),
//!     base_url: "/".into(),
//!     ..Default::default()
//! };
//!
//! let html = render_homepage(&config, "");
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! // Write to file
//! std::fs::write("index.html", html).unwrap();
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! This library uses Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod markdown;
pub mod styles;
pub mod types;

use components::{HomeDocument, UsersDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::SiteConfig;

/// Render the complete homepage from a site config.
///
/// This is the main entry point. Rendering is a single synchronous pass with
/// no side effects: identical inputs produce identical markup.
///
/// # Arguments
///
/// * `config` - the site configuration (title, tagline, URLs, users)
/// * `language` - optional language path segment for generated links; empty
///   string means no language segment
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use home_leptos::{render_homepage, types::SiteConfig};
///
/// let config = SiteConfig {
///     title: "My Portfolio".into(),
///     base_url: "/".into(),
///     ..Default::default()
/// };
///
/// let html = render_homepage(&config, "");
/// assert!(html.contains("My Portfolio"));
/// ```
pub fn render_homepage(config: &SiteConfig, language: &str) -> String {
    let doc = view! {
        <HomeDocument config=config.clone() language=language.to_string() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{html}")
}

/// Render the users page listing every adopter from the config.
///
/// The homepage showcase links here via its "more users" button.
pub fn render_users_page(config: &SiteConfig, language: &str) -> String {
    let doc = view! {
        <UsersDocument config=config.clone() language=language.to_string() />
    };

    let html = doc.to_html();

    format!("<!DOCTYPE html>\n{html}")
}

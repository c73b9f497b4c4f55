//! Site data types for structuring page content.
//!
//! These types define the data model for the homepage. They're designed to be:
//!
//! - **Serializable** - the config ships as `siteconfig.json`, field names stay
//!   camelCase on the wire so an existing Docusaurus config ports over
//! - **Clone-friendly** - components can share data without borrowing issues
//! - **Default-able** - create partial configs with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use home_leptos::types::{SiteConfig, SiteUser};
//!
//! let config = SiteConfig {
//!     title: "My Portfolio".into(),
//!     tagline: "Year 2 Computer Engineering @ NUS".into(),
//!     base_url: "/".into(),
//!     users: vec![
//!         SiteUser {
//!             caption: "Leap Engine".into(),
//!             image: "/img/leap.svg".into(),
//!             info_link: "https://example.com/leap".into(),
//!             pinned: true,
//!         }
//!     ],
//!     ..Default::default()
//! };
//!
//! assert_eq!(config.doc_url("", "doc1.html"), "/doc1.html");
//! ```

use serde::{Deserialize, Serialize};

/// The site configuration object. Supplied externally (the generator loads it
/// from `siteconfig.json`); read-only for the rendering layer.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site/project title, shown in the splash and the browser tab
    pub title: String,
    /// One-line tagline under the title
    pub tagline: String,
    /// URL prefix every generated link starts with, e.g. `/` or `/homesite/`
    pub base_url: String,
    /// Optional docs path segment; empty string means the site has no docs tree
    pub docs_url: String,
    /// Adopters listed on the showcase and the users page
    pub users: Vec<SiteUser>,
}

impl SiteConfig {
    /// Build a link into the docs tree: `base_url` + optional `docs_url/` +
    /// optional `language/` + `doc`.
    ///
    /// This is a pure string join. Omitting `docs_url` or `language` removes
    /// exactly that segment; nothing validates the inputs, so a malformed
    /// `base_url` propagates into the output unchanged.
    pub fn doc_url(&self, language: &str, doc: &str) -> String {
        let docs_part = if self.docs_url.is_empty() {
            String::new()
        } else {
            format!("{}/", self.docs_url)
        };
        let lang_part = if language.is_empty() {
            String::new()
        } else {
            format!("{language}/")
        };
        format!("{}{}{}{}", self.base_url, docs_part, lang_part, doc)
    }

    /// Build a link to another generated page: `base_url` + optional
    /// `language/` + `page`.
    pub fn page_url(&self, language: &str, page: &str) -> String {
        let lang_part = if language.is_empty() {
            String::new()
        } else {
            format!("{language}/")
        };
        format!("{}{}{}", self.base_url, lang_part, page)
    }

    /// Build a link into the static image tree: `base_url` + `img/` + `file`.
    pub fn img_url(&self, file: &str) -> String {
        format!("{}img/{}", self.base_url, file)
    }
}

/// One adopter entry in [`SiteConfig::users`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteUser {
    /// Display name, used as alt/title text on the logo
    pub caption: String,
    /// Logo image URL
    pub image: String,
    /// Where the logo links to
    pub info_link: String,
    /// Pinned users appear on the homepage showcase; the rest only on the
    /// users page
    pub pinned: bool,
}

/// A single authored content block: title, Markdown body, and an image placed
/// per [`ImageAlign`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentBlock {
    /// Block heading
    pub title: String,
    /// Markdown body, converted to HTML at render time
    pub content: String,
    /// Image URL
    pub image: String,
    /// Where the image sits relative to the text
    pub image_align: ImageAlign,
}

/// Placement of a block image relative to its text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageAlign {
    /// Image on the left, text on the right
    #[default]
    Left,
    /// Image on the right, text on the left
    Right,
    /// Image above the text (used by the four-column feature grid)
    Top,
}

/// Column layout for a grid of content blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridLayout {
    /// One wide cell per row (image beside text)
    #[default]
    TwoColumn,
    /// Narrow cells, image on top
    FourColumn,
}

/// Background shade of a block section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Background {
    /// Page background
    #[default]
    Default,
    /// Subtle light band
    Light,
    /// Dark band with inverted text
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_url_joins_all_segments() {
        let config = SiteConfig {
            base_url: "/".into(),
            docs_url: "docs".into(),
            ..Default::default()
        };
        assert_eq!(config.doc_url("en", "doc1.html"), "/docs/en/doc1.html");
    }

    #[test]
    fn doc_url_omits_empty_docs_segment() {
        let config = SiteConfig {
            base_url: "/".into(),
            ..Default::default()
        };
        assert_eq!(config.doc_url("en", "doc1.html"), "/en/doc1.html");
    }

    #[test]
    fn doc_url_omits_empty_language_segment() {
        let config = SiteConfig {
            base_url: "/".into(),
            docs_url: "docs".into(),
            ..Default::default()
        };
        assert_eq!(config.doc_url("", "doc1.html"), "/docs/doc1.html");
    }

    #[test]
    fn doc_url_introduces_no_double_slashes() {
        let config = SiteConfig {
            base_url: "/homesite/".into(),
            docs_url: "docs".into(),
            ..Default::default()
        };
        let url = config.doc_url("en", "doc1.html");
        assert_eq!(url, "/homesite/docs/en/doc1.html");
        assert!(!url.contains("//"), "unexpected double slash in {url}");
    }

    #[test]
    fn doc_url_does_not_repair_malformed_base() {
        // No validation on purpose: a malformed base propagates unchanged.
        let config = SiteConfig {
            base_url: "example.com".into(),
            ..Default::default()
        };
        assert_eq!(config.doc_url("", "doc1.html"), "example.comdoc1.html");
    }

    #[test]
    fn page_url_skips_docs_segment() {
        let config = SiteConfig {
            base_url: "/".into(),
            docs_url: "docs".into(),
            ..Default::default()
        };
        assert_eq!(config.page_url("en", "users.html"), "/en/users.html");
        assert_eq!(config.page_url("", "users.html"), "/users.html");
    }

    #[test]
    fn config_parses_camel_case_json() {
        let raw = r#"{
            "title": "My Portfolio",
            "tagline": "hello",
            "baseUrl": "/",
            "docsUrl": "docs",
            "users": [
                {"caption": "A", "image": "/img/a.svg", "infoLink": "https://a.example", "pinned": true}
            ]
        }"#;
        let config: SiteConfig = serde_json::from_str(raw).expect("valid config");
        assert_eq!(config.docs_url, "docs");
        assert_eq!(config.users.len(), 1);
        assert!(config.users[0].pinned);
        assert_eq!(config.users[0].info_link, "https://a.example");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: SiteConfig = serde_json::from_str(r#"{"title": "T"}"#).expect("valid config");
        assert_eq!(config.base_url, "");
        assert!(config.users.is_empty());
    }
}

//! Markdown conversion for authored block content.
//!
//! Block bodies are written as Markdown and converted to HTML once at render
//! time. The output lands in the page via `inner_html`, so it must only ever
//! come from content authored in this repository or the site config - never
//! from untrusted input.

use pulldown_cmark::{Options, Parser, html};

/// Convert a Markdown string to an HTML fragment.
pub fn to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

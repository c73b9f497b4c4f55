//! Homepage rendering example.
//!
//! Run with: `cargo run --example render_homepage`

use home_leptos::types::{SiteConfig, SiteUser};
use home_leptos::render_homepage;

fn main() {
    let config = SiteConfig {
        title: "My Portfolio".into(),
        tagline: "Year 2 Computer Engineering @ NUS".into(),
        base_url: "/".into(),
        docs_url: "docs".into(),
        users: vec![SiteUser {
            caption: "Leap Engine".into(),
            image: "/img/users/leap.svg".into(),
            info_link: "https://example.com/leap".into(),
            pinned: true,
        }],
    };

    // Render to HTML
    let html = render_homepage(&config, "");

    // Write to file
    let output_path = "homepage.html";
    std::fs::write(output_path, &html).expect("Failed to write homepage");

    println!("Homepage written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}

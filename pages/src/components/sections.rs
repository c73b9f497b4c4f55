//! The fixed content blocks of the homepage, in page order.
//!
//! Content is authored inline, the way the page was written: education
//! features, the about callout, a portrait block, and the two project blocks.
//! Only image paths depend on the config (via `base_url`).

use super::GridBlock;
use crate::types::{Background, ContentBlock, GridLayout, ImageAlign};
use leptos::prelude::*;

/// Education feature grid (four-column layout, images on top).
#[component]
pub fn Features(base_url: String) -> impl IntoView {
    let blocks = vec![
        ContentBlock {
            title: "National University of Singapore".into(),
            content: "The National University of Singapore (NUS) is the national research \
                      university of Singapore. Founded in 1905 as the Straits Settlements and \
                      Federated Malay States Government Medical School, NUS is the oldest higher \
                      education institution in Singapore. It is consistently ranked within the \
                      top 20 universities in the world and is considered to be the best \
                      university in the Asia-Pacific."
                .into(),
            image: format!("{base_url}img/nus_logo.svg"),
            image_align: ImageAlign::Top,
        },
        ContentBlock {
            title: "Temasek Junior College".into(),
            content: "Temasek Junior College (TJC) is a Junior College located on the eastern \
                      side of Singapore that also offers a 6 years Integrated Programme along \
                      with the traditional 2 year GCE Advanced Level curriculum."
                .into(),
            image: format!("{base_url}img/tjc_logo.png"),
            image_align: ImageAlign::Top,
        },
    ];

    view! { <GridBlock blocks=blocks layout=GridLayout::FourColumn /> }
}

/// Centered about callout between the feature grid and the portrait block.
#[component]
pub fn FeatureCallout() -> impl IntoView {
    let about_html = crate::markdown::to_html(
        "I'm a Year 2 Computer Engineering student in the National University of Singapore.",
    );

    view! {
        <div class="callout-section">
            <h2>"About"</h2>
            <div inner_html=about_html></div>
        </div>
    }
}

/// Portrait block on a light band.
#[component]
pub fn LearnHow(base_url: String) -> impl IntoView {
    let blocks = vec![ContentBlock {
        title: "About Me".into(),
        content: String::new(),
        image: format!("{base_url}img/profile.jpg"),
        image_align: ImageAlign::Right,
    }];

    view! { <GridBlock blocks=blocks background=Background::Light /> }
}

/// First project block; carries the `#try` anchor the splash links to.
#[component]
pub fn TryOut(base_url: String) -> impl IntoView {
    let blocks = vec![ContentBlock {
        title: "Project: Leap Engine".into(),
        content: "- Level of achievement: Artemis\n\
                  - Collaborated in team of 2 to develop a web-based 3D scene rendering engine\n\
                  - UI and UX development (Landing Page & Login Page)\n\
                  - Gained programming experience and upgraded technical skills\n\
                  - Self-learning skills\n\
                  - Programming: HTML5, JavaScript and CSS"
            .into(),
        image: format!("{base_url}img/project_leapengine_cut.jpg"),
        image_align: ImageAlign::Right,
    }];

    view! { <GridBlock blocks=blocks id="try" /> }
}

/// Second project block on a dark band.
#[component]
pub fn Description(base_url: String) -> impl IntoView {
    let blocks = vec![ContentBlock {
        title: "Project: Verilog Program written for FPGA board".into(),
        content: "- FPGA development using Fast Fourier Transformation to detect voice frequency\n\
                  - Audio and volume detection and graphic output\n\
                  - Maze Game development of display and user input\n\
                  - Programming: Verilog"
            .into(),
        image: format!("{base_url}img/project_ee.jpg"),
        image_align: ImageAlign::Left,
    }];

    view! { <GridBlock blocks=blocks background=Background::Dark /> }
}

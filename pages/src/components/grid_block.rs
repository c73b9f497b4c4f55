//! Generic content-block grid.
//!
//! Every content section of the homepage is a [`GridBlock`]: a band with an
//! optional background shade holding one or more [`ContentBlock`] cells. The
//! cell lays its image out per [`ImageAlign`] and converts the Markdown body
//! to HTML.

use crate::markdown;
use crate::types::{Background, ContentBlock, GridLayout, ImageAlign};
use leptos::prelude::*;

/// A band of content blocks.
#[component]
pub fn GridBlock(
    blocks: Vec<ContentBlock>,
    #[prop(default = GridLayout::TwoColumn)] layout: GridLayout,
    #[prop(default = Background::Default)] background: Background,
    /// Anchor id so splash buttons can link to the section
    #[prop(optional, into)]
    id: Option<&'static str>,
) -> impl IntoView {
    let section_class = match background {
        Background::Default => "block-section",
        Background::Light => "block-section light",
        Background::Dark => "block-section dark",
    };
    let grid_class = match layout {
        GridLayout::TwoColumn => "block-grid two-column",
        GridLayout::FourColumn => "block-grid four-column",
    };

    view! {
        <section class=section_class id=id>
            <div class=grid_class>
                {blocks
                    .into_iter()
                    .map(|block| view! { <BlockCell block=block /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn BlockCell(block: ContentBlock) -> impl IntoView {
    let cell_class = match block.image_align {
        ImageAlign::Left => "block-cell image-left",
        ImageAlign::Right => "block-cell image-right",
        ImageAlign::Top => "block-cell image-top",
    };
    let content_html = markdown::to_html(&block.content);

    view! {
        <article class=cell_class>
            <div class="block-image">
                <img src=block.image alt=block.title.clone() />
            </div>
            <div class="block-body">
                <h3 class="block-title">{block.title}</h3>
                <div class="block-content" inner_html=content_html></div>
            </div>
        </article>
    }
}

//! Leptos UI components for rendering the homepage.
//!
//! Each component is a Leptos `#[component]` function; they compose into the
//! two page documents.
//!
//! # Component Hierarchy
//!
//! ```text
//! HomeDocument
//! ├── HomeSplash
//! │   ├── Logo
//! │   ├── ProjectTitle
//! │   └── PromoSection (promo buttons)
//! ├── Features        (GridBlock, four-column)
//! ├── FeatureCallout
//! ├── LearnHow        (GridBlock, light band)
//! ├── TryOut          (GridBlock, #try anchor)
//! ├── Description     (GridBlock, dark band)
//! └── Showcase        (pinned users, or nothing)
//!
//! UsersDocument
//! └── UsersPage       (all users)
//! ```
//!
//! Components are typically used via [`crate::render_homepage`] and
//! [`crate::render_users_page`], but can be composed directly for custom
//! layouts.

mod document;
mod grid_block;
mod sections;
mod showcase;
mod splash;

pub use document::{HomeDocument, UsersDocument};
pub use grid_block::GridBlock;
pub use sections::{Description, FeatureCallout, Features, LearnHow, TryOut};
pub use showcase::{Showcase, UsersPage};
pub use splash::HomeSplash;

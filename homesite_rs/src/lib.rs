//! # homesite
//!
//! Static site generator for a personal homepage.
//!
//! The rendering itself lives in the `home-leptos` crate; this crate is the
//! tooling around it:
//!
//! - [`config`] - load and validate `siteconfig.json`
//! - [`site`] - render the pages and assemble the output directory
//! - [`serve`] - loopback preview server for the generated site

#![warn(missing_docs)]

pub mod config;
pub mod serve;
pub mod site;

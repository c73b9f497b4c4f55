//! Build pipeline: render the pages and assemble the output directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use home_leptos::types::SiteConfig;
use home_leptos::{render_homepage, render_users_page};
use tracing::{debug, info};
use walkdir::WalkDir;

/// What a build produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// HTML pages written
    pub pages_written: usize,
    /// Static files copied into the output tree
    pub assets_copied: usize,
}

/// Render the site and write it under `out_dir`.
///
/// Pages land in a `language` subdirectory when a language is set, matching
/// the links [`SiteConfig::page_url`] generates. The static tree, if present,
/// is copied verbatim next to the pages.
pub fn build(
    config: &SiteConfig,
    language: &str,
    static_dir: Option<&Path>,
    out_dir: &Path,
) -> Result<BuildSummary> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let mut summary = BuildSummary::default();

    let index = render_homepage(config, language);
    write_page(out_dir, language, "index.html", &index)?;
    summary.pages_written += 1;

    let users = render_users_page(config, language);
    write_page(out_dir, language, "users.html", &users)?;
    summary.pages_written += 1;

    if let Some(dir) = static_dir {
        if dir.is_dir() {
            summary.assets_copied = copy_static(dir, out_dir)?;
        } else {
            debug!("static dir {} not found, skipping asset copy", dir.display());
        }
    }

    info!(
        pages = summary.pages_written,
        assets = summary.assets_copied,
        "site built into {}",
        out_dir.display()
    );
    Ok(summary)
}

fn write_page(out_dir: &Path, language: &str, name: &str, html: &str) -> Result<()> {
    let dir = if language.is_empty() {
        out_dir.to_path_buf()
    } else {
        out_dir.join(language)
    };
    fs::create_dir_all(&dir)
        .with_context(|| format!("creating page directory {}", dir.display()))?;
    let path = dir.join(name);
    fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
    debug!("wrote {}", path.display());
    Ok(())
}

/// Copy the static tree into the output directory, preserving structure.
fn copy_static(static_dir: &Path, out_dir: &Path) -> Result<usize> {
    let mut copied = 0usize;
    for entry in WalkDir::new(static_dir) {
        let entry = entry.with_context(|| format!("walking {}", static_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(static_dir)
            .expect("walkdir yields paths under its root");
        let target = out_dir.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating asset directory {}", parent.display()))?;
        }
        fs::copy(entry.path(), &target)
            .with_context(|| format!("copying {} to {}", entry.path().display(), target.display()))?;
        copied += 1;
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config() -> SiteConfig {
        SiteConfig {
            title: "T".into(),
            tagline: "t".into(),
            base_url: "/".into(),
            ..Default::default()
        }
    }

    #[test]
    fn build_writes_both_pages() {
        let out = tempdir();
        let summary = build(&minimal_config(), "", None, out.path()).unwrap();

        assert_eq!(summary.pages_written, 2);
        assert!(out.path().join("index.html").is_file());
        assert!(out.path().join("users.html").is_file());
    }

    #[test]
    fn language_pages_land_in_subdirectory() {
        let out = tempdir();
        build(&minimal_config(), "en", None, out.path()).unwrap();

        assert!(out.path().join("en/index.html").is_file());
        assert!(out.path().join("en/users.html").is_file());
    }

    #[test]
    fn static_tree_is_copied_preserving_structure() {
        let assets = tempdir();
        fs::create_dir_all(assets.path().join("img")).unwrap();
        fs::write(assets.path().join("img/logo.svg"), "<svg/>").unwrap();

        let out = tempdir();
        let summary = build(&minimal_config(), "", Some(assets.path()), out.path()).unwrap();

        assert_eq!(summary.assets_copied, 1);
        assert_eq!(
            fs::read_to_string(out.path().join("img/logo.svg")).unwrap(),
            "<svg/>"
        );
    }

    #[test]
    fn missing_static_dir_is_not_an_error() {
        let out = tempdir();
        let missing = out.path().join("no-such-dir");
        let summary = build(&minimal_config(), "", Some(&missing), out.path()).unwrap();

        assert_eq!(summary.assets_copied, 0);
    }

    fn tempdir() -> tempfile::TempDir {
        tempfile::tempdir().expect("tempdir")
    }
}

//! Site configuration loading and validation.
//!
//! The config ships as `siteconfig.json` next to the static assets. Loading
//! is strict (a broken file is an error, not a silent default); validation is
//! a separate pass driven by the `check` command, because the rendering layer
//! itself never validates.

use std::path::Path;

use home_leptos::types::SiteConfig;
use thiserror::Error;

/// Errors from loading `siteconfig.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("could not read {path}: {source}")]
    Io {
        /// Path we tried to read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON for a site config
    #[error("could not parse {path}: {source}")]
    Parse {
        /// Path we tried to parse
        path: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },
}

/// Load a site config from a JSON file.
pub fn load(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Validate a config and its referenced assets. Returns one human-readable
/// finding per problem; an empty list means the config is sound.
///
/// `static_dir` is the tree that gets copied into the output; when given,
/// images whose URL falls under `base_url` are checked for existence there.
pub fn lint(config: &SiteConfig, static_dir: Option<&Path>) -> Vec<String> {
    let mut findings = Vec::new();

    if config.title.is_empty() {
        findings.push("title is empty".to_string());
    }
    if config.tagline.is_empty() {
        findings.push("tagline is empty".to_string());
    }
    if config.base_url.is_empty() {
        findings.push("baseUrl is empty; every generated link will be relative".to_string());
    } else {
        if !config.base_url.starts_with('/') {
            findings.push(format!(
                "baseUrl '{}' does not start with '/'",
                config.base_url
            ));
        }
        if !config.base_url.ends_with('/') {
            findings.push(format!(
                "baseUrl '{}' does not end with '/'; links will concatenate badly",
                config.base_url
            ));
        }
    }

    for (idx, user) in config.users.iter().enumerate() {
        if user.caption.is_empty() {
            findings.push(format!("users[{idx}] has an empty caption"));
        }
        if user.image.is_empty() {
            findings.push(format!("users[{idx}] has an empty image"));
        }
        if user.info_link.is_empty() {
            findings.push(format!("users[{idx}] has an empty infoLink"));
        }
    }

    if let Some(dir) = static_dir {
        check_local_image(config, &config.img_url("undraw_monitor.svg"), dir, &mut findings);
        for user in &config.users {
            check_local_image(config, &user.image, dir, &mut findings);
        }
    }

    findings
}

/// Images under `base_url` must exist in the static tree; anything else
/// (absolute URLs to other hosts) is out of scope for the check.
fn check_local_image(config: &SiteConfig, url: &str, static_dir: &Path, findings: &mut Vec<String>) {
    let Some(relative) = url.strip_prefix(config.base_url.as_str()) else {
        return;
    };
    if relative.is_empty() || relative.contains("://") {
        return;
    }
    let candidate = static_dir.join(relative);
    if !candidate.is_file() {
        findings.push(format!(
            "image {} not found under {}",
            url,
            static_dir.display()
        ));
    }
}

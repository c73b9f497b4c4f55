//! End-to-End CLI tests for homesite.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get path to test fixtures
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get a command pointing to the homesite binary
fn homesite() -> Command {
    cargo_bin_cmd!("homesite")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        homesite()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("homesite"))
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn shows_version() {
        homesite()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn unknown_subcommand_fails() {
        homesite().arg("deploy").assert().failure();
    }
}

// ============================================
// Build Mode Tests
// ============================================

mod build_mode {
    use super::*;

    fn build_into(out: &TempDir, extra: &[&str]) -> assert_cmd::assert::Assert {
        let fixture = fixtures_path().join("basic_site");
        homesite()
            .arg("build")
            .arg("--config")
            .arg(fixture.join("siteconfig.json"))
            .arg("--static-dir")
            .arg(fixture.join("static"))
            .arg("--out")
            .arg(out.path())
            .args(extra)
            .assert()
    }

    #[test]
    fn builds_site_into_out_dir() {
        let out = TempDir::new().unwrap();

        build_into(&out, &[]).success();

        let index = std::fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(index.starts_with("<!DOCTYPE html>"));
        assert!(index.contains("My Portfolio"));
        assert!(out.path().join("users.html").exists());
    }

    #[test]
    fn copies_static_assets() {
        let out = TempDir::new().unwrap();

        build_into(&out, &[]).success();

        assert!(out.path().join("img/undraw_monitor.svg").exists());
        assert!(out.path().join("img/users/leap.svg").exists());
    }

    #[test]
    fn showcase_lists_only_pinned_users() {
        let out = TempDir::new().unwrap();

        build_into(&out, &[]).success();

        let index = std::fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(index.contains("img/users/leap.svg"));
        assert!(!index.contains("img/users/maze.svg"));

        let users = std::fs::read_to_string(out.path().join("users.html")).unwrap();
        assert!(users.contains("img/users/leap.svg"));
        assert!(users.contains("img/users/maze.svg"));
    }

    #[test]
    fn build_is_idempotent() {
        let out = TempDir::new().unwrap();

        build_into(&out, &[]).success();
        let first = std::fs::read_to_string(out.path().join("index.html")).unwrap();

        build_into(&out, &[]).success();
        let second = std::fs::read_to_string(out.path().join("index.html")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn language_pages_land_in_subdir() {
        let out = TempDir::new().unwrap();

        build_into(&out, &["--language", "en"]).success();

        assert!(out.path().join("en/index.html").exists());
        let index = std::fs::read_to_string(out.path().join("en/index.html")).unwrap();
        assert!(index.contains("/en/users.html"));
    }

    #[test]
    fn missing_config_fails_with_path_in_message() {
        let out = TempDir::new().unwrap();

        homesite()
            .arg("build")
            .arg("--config")
            .arg("no-such-config.json")
            .arg("--out")
            .arg(out.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("no-such-config.json"));
    }

    #[test]
    fn missing_static_dir_is_tolerated() {
        let out = TempDir::new().unwrap();
        let fixture = fixtures_path().join("basic_site");

        homesite()
            .arg("build")
            .arg("--config")
            .arg(fixture.join("siteconfig.json"))
            .arg("--static-dir")
            .arg(fixture.join("no-such-static"))
            .arg("--out")
            .arg(out.path())
            .assert()
            .success();

        assert!(out.path().join("index.html").exists());
    }
}

// ============================================
// Check Mode Tests
// ============================================

mod check_mode {
    use super::*;

    #[test]
    fn valid_config_passes() {
        let fixture = fixtures_path().join("basic_site");

        homesite()
            .arg("check")
            .arg("--config")
            .arg(fixture.join("siteconfig.json"))
            .arg("--static-dir")
            .arg(fixture.join("static"))
            .assert()
            .success()
            .stdout(predicate::str::contains("config looks good"));
    }

    #[test]
    fn broken_config_reports_findings() {
        let fixture = fixtures_path().join("broken_site");

        homesite()
            .arg("check")
            .arg("--config")
            .arg(fixture.join("siteconfig.json"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("title"))
            .stderr(predicate::str::contains("infoLink"));
    }

    #[test]
    fn missing_config_file_fails() {
        homesite()
            .arg("check")
            .arg("--config")
            .arg("no-such-config.json")
            .assert()
            .failure()
            .stderr(predicate::str::contains("no-such-config.json"));
    }
}

// ============================================
// Serve Mode Tests
// ============================================

mod serve_mode {
    use super::*;

    #[test]
    fn refuses_to_serve_missing_out_dir() {
        homesite()
            .arg("serve")
            .arg("--out")
            .arg("no-such-site-dir")
            .assert()
            .failure()
            .stderr(predicate::str::contains("homesite build"));
    }
}

//! CLI Integration Tests for rejuvana-site
//!
//! Runs the binary through `cargo run` and checks help output, the offline
//! commands and configuration handling. Nothing here touches the network.

#![cfg(feature = "server")]

use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Helper to run rejuvana-site with arguments
fn run_site(args: &[&str]) -> std::process::Output {
    let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
    Command::new("cargo")
        .arg("run")
        .arg("--quiet")
        .arg("--manifest-path")
        .arg(manifest)
        .arg("--")
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Same as [`run_site`] with extra environment variables
fn run_site_with_env(args: &[&str], vars: &[(&str, &str)]) -> std::process::Output {
    let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
    Command::new("cargo")
        .arg("run")
        .arg("--quiet")
        .arg("--manifest-path")
        .arg(manifest)
        .arg("--")
        .args(args)
        .env_remove("RUST_LOG")
        .envs(vars.iter().copied())
        .output()
        .expect("Failed to execute command")
}

/// Write a config whose secrets point at variables that are never set
fn offline_config(dir: &TempDir, extra: &str) -> String {
    let path = dir.path().join("rejuvana.toml");
    fs::write(
        &path,
        format!(
            "[feed]\napi_key_env = \"REJUVANA_CLI_TEST_UNSET_KEY\"\n\n\
             [lead]\ntoken_env = \"REJUVANA_CLI_TEST_UNSET_TOKEN\"\n{}",
            extra
        ),
    )
    .expect("Failed to write config");
    path.to_string_lossy().into_owned()
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_command() {
    let output = run_site(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Rejuvana Living"));
    assert!(stdout.contains("USAGE") || stdout.contains("Usage"));
    assert!(stdout.contains("feed"));
    assert!(stdout.contains("lead"));
    assert!(stdout.contains("guides"));
    assert!(stdout.contains("config"));
}

#[test]
fn test_version_command() {
    let output = run_site(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("rejuvana-site"));
}

#[test]
fn test_lead_help() {
    let output = run_site(&["lead", "--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--name"));
    assert!(stdout.contains("--email"));
    assert!(stdout.contains("--message"));
}

// =============================================================================
// Offline Commands
// =============================================================================

#[test]
fn test_guides_preview_and_all() {
    let output = run_site(&["--no-color", "guides"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wellness Guides (6 of 12)"));

    let output = run_site(&["--no-color", "guides", "--all"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wellness Guides (12 of 12)"));
}

#[test]
fn test_feed_without_key_prints_fallback_json() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = offline_config(&dir, "");

    let output = run_site(&["--config", &config, "feed", "--json"]);
    assert!(output.status.success());

    let posts: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let posts = posts.as_array().expect("expected an array");
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["id"], "cached-1");
    assert_eq!(posts[0]["platform"], "instagram");
}

#[test]
fn test_lead_without_token_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = offline_config(&dir, "");

    let output = run_site(&[
        "--no-color",
        "--config",
        &config,
        "lead",
        "--name",
        "Jane Doe",
        "--email",
        "jane@example.com",
        "--message",
        "Hello",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("REJUVANA_CLI_TEST_UNSET_TOKEN"));
}

// =============================================================================
// Config Command Tests
// =============================================================================

#[test]
fn test_config_shows_values() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = offline_config(&dir, "\n[server]\nport = 9191\n");

    let output = run_site(&["--no-color", "--config", &config, "config"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("9191"));
    assert!(stdout.contains("gemini-3-pro-preview"));
    assert!(stdout.contains("Website Lead"));
}

#[test]
fn test_missing_config_falls_back_to_defaults_with_notice() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("absent.toml");

    let output = run_site(&["--no-color", "--config", &missing.to_string_lossy(), "config"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("using defaults"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("8080"));
}

#[test]
fn test_config_suggests_validation() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = offline_config(&dir, "");

    let output = run_site(&["--no-color", "--config", &config, "config"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("$ rejuvana-site config --validate"));
}

#[test]
fn test_config_validate_lists_checked_secrets() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = offline_config(&dir, "");

    let output = run_site_with_env(
        &["--no-color", "--config", &config, "config", "--validate"],
        &[
            ("REJUVANA_CLI_TEST_UNSET_KEY", "test-key"),
            ("REJUVANA_CLI_TEST_UNSET_TOKEN", "test-token"),
        ],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("- REJUVANA_CLI_TEST_UNSET_KEY is set"));
    assert!(stdout.contains("- REJUVANA_CLI_TEST_UNSET_TOKEN is set"));
    assert!(stdout.contains("Configuration is valid"));
}

#[test]
fn test_feed_without_key_explains_cached_posts() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = offline_config(&dir, "");

    let output = run_site(&["--no-color", "--config", &config, "feed"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[INFO] Showing cached posts"));
    assert!(stdout.contains("@rejuvanaliving"));
}

#[test]
fn test_config_validate_reports_missing_secret() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = offline_config(&dir, "");

    let output = run_site(&["--no-color", "--config", &config, "config", "--validate"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("REJUVANA_CLI_TEST_UNSET_KEY"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[feed]\npost_count = 0\n").expect("Failed to write config");

    let output = run_site(&["--config", &path.to_string_lossy(), "config"]);
    assert!(!output.status.success());
}

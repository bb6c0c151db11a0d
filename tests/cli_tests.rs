//! CLI Integration Tests for AgroVision
//!
//! Runs the built `agrovision` binary in a temporary working directory, with a
//! wiremock server standing in for the backend where one is needed.

use serde_json::json;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build an `agrovision` command isolated from the caller's environment
fn agrovision(working_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_agrovision"));
    cmd.current_dir(working_dir)
        .env_remove("AGRO_API_BASE_URL")
        .env_remove("AGRO_CACHE_PATH")
        .env_remove("AGRO_LOG")
        .arg("--no-color");
    cmd
}

fn run(working_dir: &Path, args: &[&str]) -> Output {
    agrovision(working_dir)
        .args(args)
        .output()
        .expect("Failed to execute agrovision")
}

async fn run_async(working_dir: &Path, args: &[&str]) -> Output {
    tokio::process::Command::from(agrovision(working_dir))
        .args(args)
        .output()
        .await
        .expect("Failed to execute agrovision")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// =============================================================================
// Help and Options
// =============================================================================

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["--help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    for command in ["crop", "disease", "chat", "cache", "status", "options"] {
        assert!(text.contains(command), "missing {command} in help:\n{text}");
    }
}

#[test]
fn test_options_lists_allowed_values() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["options"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Soil Type: Sandy, Loamy, Clay, Black, Red (default: Loamy)"));
    assert!(text.contains("Weather: Cool & Dry, Warm, Hot & Humid, Sunny"));
    assert!(text.contains("pH Range: Acidic, Neutral, Alkaline"));
}

#[test]
fn test_options_ignores_broken_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("agrovision.toml"), "[api").unwrap();

    assert!(run(dir.path(), &["options"]).status.success());
}

#[test]
fn test_invalid_crop_value_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["crop", "--soil-type", "gravel"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Sandy, Loamy, Clay, Black, Red"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_invalid_base_url_fails() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["status", "--base-url", "localhost:8000"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("api.base_url"));
}

// =============================================================================
// Cache
// =============================================================================

#[test]
fn test_cache_show_and_clear() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("cache.json");
    let crop = json!({"recommendations": [{"crop": "Millet", "confidence": 87}]});
    fs::write(
        &cache,
        json!({"agro_last_crop_result": crop.to_string()}).to_string(),
    )
    .unwrap();
    let cache_arg = cache.to_str().unwrap();

    let output = run(dir.path(), &["cache", "show", "--cache", cache_arg]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Millet"));
    assert!(text.contains("Disease: empty"));

    let output = run(dir.path(), &["cache", "clear", "--cache", cache_arg]);
    assert!(output.status.success());

    let output = run(dir.path(), &["cache", "show", "--cache", cache_arg]);
    assert!(stdout(&output).contains("Crop: empty"));
}

#[test]
fn test_cache_clear_recovers_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("cache.json");
    fs::write(&cache, "{ not json").unwrap();
    let cache_arg = cache.to_str().unwrap();

    let output = run(dir.path(), &["cache", "clear", "--cache", cache_arg]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(fs::read_to_string(&cache).unwrap().trim(), "{}");

    let output = run(dir.path(), &["cache", "show", "--cache", cache_arg]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Crop: empty"));
}

// =============================================================================
// Backend commands
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_crop_prints_ranked_recommendations() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/predict-crop"))
        .and(body_json(json!({
            "soil_type": "Sandy",
            "season": "Summer",
            "rainfall_level": "Medium",
            "weather": "Warm",
            "ph_range": "Neutral"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommendations": [
                {"crop": "millet", "confidence": 87},
                {"crop": "Sorghum", "confidence": 72}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let uri = server.uri();
    let output = run_async(
        dir.path(),
        &["crop", "--soil-type", "sandy", "--season", "SUMMER", "--base-url", &uri],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("1. Millet — 87%"));
    assert!(text.contains("2. Sorghum — 72%"));
    assert!(dir.path().join(".agrovision/cache.json").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_chat_failure_prints_apology_and_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let uri = server.uri();
    let output = run_async(dir.path(), &["chat", "hello", "--base-url", &uri]).await;

    assert!(!output.status.success());
    assert!(stdout(&output).contains("Sorry, I encountered an error. Please try again."));
    assert!(stderr(&output).contains("502"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_status_reports_backend_up() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/healthz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let uri = server.uri();
    let output = run_async(dir.path(), &["status", "--base-url", &uri]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("status: ok"));
}

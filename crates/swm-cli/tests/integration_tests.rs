//! End-to-end integration tests for the swm CLI.

use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Test context that sets up a temporary swm home environment
struct TestContext {
    temp_dir: TempDir,
    swm_home: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let swm_home = temp_dir.path().join(".swm");
        std::fs::create_dir_all(&swm_home).expect("failed to create swm home");

        Self { temp_dir, swm_home }
    }

    fn swm_cmd(&self) -> Command {
        let bin_path = env!("CARGO_BIN_EXE_swm");
        let mut cmd = Command::new(bin_path);
        cmd.env("HOME", self.temp_dir.path());
        cmd.env("SWM_HOME", &self.swm_home);
        cmd
    }

    /// Run a subcommand with `--json` and parse the envelope from stdout.
    fn json(&self, args: &[&str]) -> (bool, Value) {
        let output = self
            .swm_cmd()
            .args(args)
            .arg("--json")
            .output()
            .expect("failed to run swm");
        let stdout = String::from_utf8_lossy(&output.stdout);
        let envelope: Value = serde_json::from_str(stdout.trim())
            .unwrap_or_else(|e| panic!("bad envelope from {args:?}: {e}\n{stdout}"));
        (output.status.success(), envelope)
    }

    fn registry_path(&self) -> PathBuf {
        self.swm_home.join("registry.json")
    }
}

#[test]
fn test_help_command() {
    let ctx = TestContext::new();
    let output = ctx
        .swm_cmd()
        .arg("--help")
        .output()
        .expect("failed to run swm");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_version_command() {
    let ctx = TestContext::new();
    let output = ctx
        .swm_cmd()
        .arg("--version")
        .output()
        .expect("failed to run swm");
    assert!(output.status.success());
}

#[test]
fn test_install_scenario_round_trip() {
    let ctx = TestContext::new();

    let (ok, envelope) = ctx.json(&["install", "python"]);
    assert!(ok);
    assert_eq!(envelope["ok"], true);
    assert_eq!(envelope["data"]["name"], "python");
    assert_eq!(envelope["data"]["version"], "3.11.0");
    assert_eq!(envelope["data"]["status"], "installed");

    let (ok, envelope) = ctx.json(&["install", "python"]);
    assert!(!ok);
    assert_eq!(envelope["ok"], false);
    assert_eq!(envelope["error"]["code"], "already_installed");

    let (ok, envelope) = ctx.json(&["uninstall", "python"]);
    assert!(ok);
    assert_eq!(envelope["ok"], true);

    let (ok, envelope) = ctx.json(&["update", "python"]);
    assert!(!ok);
    assert_eq!(envelope["error"]["code"], "not_installed");
}

#[test]
fn test_install_persists_registry_document() {
    let ctx = TestContext::new();
    ctx.json(&["install", "git"]);

    let content = std::fs::read_to_string(ctx.registry_path()).expect("registry should exist");
    let doc: Value = serde_json::from_str(&content).expect("registry should be JSON");
    let entry = &doc["installed_software"]["git"];
    assert_eq!(entry["version"], "2.43.0");
    assert_eq!(entry["auto_update"], false);
    assert!(entry["installed_date"].is_string());
}

#[test]
fn test_state_survives_across_processes_case_insensitively() {
    let ctx = TestContext::new();
    ctx.json(&["install", "Docker"]);

    let (ok, envelope) = ctx.json(&["info", "docker"]);
    assert!(ok);
    assert_eq!(envelope["data"]["installed"], true);
    assert_eq!(envelope["data"]["current_version"], "25.0.1");

    let (_, envelope) = ctx.json(&["list"]);
    assert_eq!(envelope["data"]["count"], 1);
    assert_eq!(envelope["data"]["installed_software"][0]["name"], "docker");
}

#[test]
fn test_outdated_then_update_clears_updates() {
    let ctx = TestContext::new();
    // Seed an outdated install directly in the document.
    std::fs::write(
        ctx.registry_path(),
        r#"{ "installed_software": { "nodejs": {
            "version": "20.0.0",
            "installed_date": "2024-01-01T00:00:00Z",
            "auto_update": false
        } } }"#,
    )
    .unwrap();

    let (ok, envelope) = ctx.json(&["outdated"]);
    assert!(ok);
    assert_eq!(envelope["data"]["count"], 1);
    assert_eq!(envelope["data"]["available_updates"][0]["name"], "nodejs");

    let (ok, envelope) = ctx.json(&["update", "nodejs"]);
    assert!(ok);
    assert_eq!(envelope["data"]["old_version"], "20.0.0");
    assert_eq!(envelope["data"]["new_version"], "21.6.0");

    let (_, envelope) = ctx.json(&["outdated"]);
    assert_eq!(envelope["data"]["count"], 0);
}

#[test]
fn test_recommendations() {
    let ctx = TestContext::new();

    let (ok, envelope) = ctx.json(&["recommend", "web", "development"]);
    assert!(ok);
    assert_eq!(envelope["data"]["task"], "web development");
    assert_eq!(
        envelope["data"]["recommendations"],
        serde_json::json!(["python", "nodejs", "vscode", "git"])
    );
    assert_eq!(envelope["data"]["count"], 4);

    let (ok, envelope) = ctx.json(&["recommend", "quantum", "computing"]);
    assert!(!ok);
    assert_eq!(envelope["error"]["code"], "software_not_found");
    let hint = envelope["error"]["hint"].as_str().unwrap();
    assert!(hint.starts_with("Available tasks:"));
    assert!(hint.contains("full stack"));
}

#[test]
fn test_autoupdate_toggle() {
    let ctx = TestContext::new();
    ctx.json(&["install", "vscode"]);

    let (ok, envelope) = ctx.json(&["autoupdate", "vscode", "on"]);
    assert!(ok);
    assert_eq!(envelope["data"]["auto_update"], true);

    let (_, envelope) = ctx.json(&["info", "vscode"]);
    assert_eq!(envelope["data"]["auto_update"], true);

    let (ok, envelope) = ctx.json(&["autoupdate", "vscode", "off"]);
    assert!(ok);
    assert_eq!(envelope["data"]["status"], "auto-update disabled");
}

#[test]
fn test_unknown_software_fails_with_hint() {
    let ctx = TestContext::new();
    let (ok, envelope) = ctx.json(&["install", "emacs"]);
    assert!(!ok);
    assert_eq!(envelope["error"]["code"], "software_not_found");
    assert!(
        envelope["error"]["hint"]
            .as_str()
            .unwrap()
            .contains("postgresql")
    );
}

#[test]
fn test_whitespace_name_is_invalid_input() {
    let ctx = TestContext::new();
    let (ok, envelope) = ctx.json(&["install", "   "]);
    assert!(!ok);
    assert_eq!(envelope["error"]["code"], "invalid_input");
}

#[test]
fn test_corrupt_registry_is_a_registry_error() {
    let ctx = TestContext::new();
    std::fs::write(ctx.registry_path(), "{ not json").unwrap();

    let (ok, envelope) = ctx.json(&["install", "git"]);
    assert!(!ok);
    assert_eq!(envelope["error"]["code"], "registry_error");

    // The corrupt document must not have been clobbered.
    let content = std::fs::read_to_string(ctx.registry_path()).unwrap();
    assert_eq!(content, "{ not json");
}

#[test]
fn test_config_file_overrides_registry_filename() {
    let ctx = TestContext::new();
    std::fs::write(
        ctx.swm_home.join("config.toml"),
        "[registry]\nfile = \"state.json\"\n",
    )
    .unwrap();

    let (ok, _) = ctx.json(&["install", "mysql"]);
    assert!(ok);
    assert!(ctx.swm_home.join("state.json").exists());
    assert!(!ctx.registry_path().exists());
}

#[test]
fn test_human_output_for_empty_list() {
    let ctx = TestContext::new();
    let output = ctx
        .swm_cmd()
        .arg("list")
        .output()
        .expect("failed to run swm list");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No software installed"));
}

#[test]
fn test_completions_command() {
    let ctx = TestContext::new();
    let output = ctx
        .swm_cmd()
        .args(["completions", "bash"])
        .output()
        .expect("failed to run swm completions");
    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}

//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    // Keep the run hermetic: no ambient log filter, no user config lookup
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("WORDIFY_LOG_LEVEL");
    cmd.env_remove("WORDIFY_LOG_DIR");
    cmd.env_remove("WORDIFY_QUIET_REPL");
    cmd
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_arguments_shows_help() {
    cmd().assert().failure().stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Convert Command
// =============================================================================

#[test]
fn convert_renders_english_words() {
    cmd()
        .args(["convert", "1234"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "One thousand two hundred and thirty four\n",
        ));
}

#[test]
fn convert_handles_negative_numbers() {
    cmd()
        .args(["convert", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Negative one\n"));
}

#[test]
fn convert_zero() {
    cmd()
        .args(["convert", "0"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Zero\n"));
}

#[test]
fn convert_rejects_leading_zero() {
    cmd()
        .args(["convert", "007"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hex numbers"));
}

#[test]
fn convert_rejects_fraction() {
    cmd()
        .args(["convert", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fractional numbers"));
}

#[test]
fn convert_json_reports_valid_input() {
    let output = cmd()
        .args(["convert", "1001", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("convert --json should output valid JSON");

    assert_eq!(json["input"], "1001");
    assert_eq!(json["valid"], true);
    assert_eq!(json["words"], "One thousand and one");
}

#[test]
fn convert_json_reports_hint_for_invalid_input() {
    let output = cmd()
        .args(["convert", "-0", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["valid"], false);
    assert_eq!(json["hint"], "negative-zero");
    assert!(json["message"].as_str().unwrap().contains("Negative zero"));
}

// =============================================================================
// Check Command
// =============================================================================

#[test]
fn check_passes_valid_input() {
    cmd()
        .args(["check", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"));
}

#[test]
fn check_fails_with_hint() {
    cmd()
        .args(["check", "--", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Negative what?"));
}

#[test]
fn check_json_classifies_whitespace() {
    let output = cmd()
        .args(["check", "1 2", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["hint"], "whitespace");
}

// =============================================================================
// Limits Command
// =============================================================================

#[test]
fn limits_shows_digit_bound_and_scale() {
    cmd()
        .arg("limits")
        .assert()
        .success()
        .stdout(predicate::str::contains("36 digits"))
        .stdout(predicate::str::contains("decillion"));
}

#[test]
fn limits_json_max_is_all_nines() {
    let output = cmd().args(["limits", "--json"]).assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["digits"], 36);
    assert_eq!(json["scales"], 11);
    assert_eq!(json["last_scale"], "decillion");
    let max = json["max"].as_str().unwrap();
    assert_eq!(max.len(), 36);
    assert!(max.bytes().all(|b| b == b'9'));
    assert_eq!(json["min"].as_str().unwrap(), format!("-{max}"));
}

#[test]
fn limits_words_renders_both_bounds() {
    cmd()
        .args(["limits", "--words"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nine hundred ninety nine decillion"))
        .stdout(predicate::str::contains("Negative nine hundred ninety nine decillion"));
}

// =============================================================================
// Repl Command
// =============================================================================

#[test]
fn repl_converts_lines_until_quit() {
    cmd()
        .arg("repl")
        .write_stdin("12345\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to wordify"))
        .stdout(predicate::str::contains(
            "Twelve thousand three hundred and forty five",
        ));
}

#[test]
fn repl_no_banner_suppresses_welcome() {
    cmd()
        .args(["repl", "--no-banner"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome").not());
}

#[test]
fn repl_prints_hints_on_stderr() {
    cmd()
        .arg("repl")
        .write_stdin("abc\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("numerals 0-9"));
}

#[test]
fn repl_max_token_expands() {
    cmd()
        .arg("repl")
        .write_stdin("max\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("decillion"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"]["log_level"].is_string());
}

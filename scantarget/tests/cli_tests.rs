use assert_cmd::Command;
use predicates::prelude::*;

fn scantarget() -> Command {
    Command::cargo_bin("scantarget").expect("binary should build")
}

#[test]
fn test_bare_run_prints_banner_and_user() {
    scantarget()
        .assert()
        .success()
        .stdout(predicate::str::contains("Legacy Code Analyzer Demo"))
        .stdout(predicate::str::contains("User: { id: 1, name: \"Demo User\" }"));
}

#[test]
fn test_bare_run_prints_exactly_two_lines() {
    // The simulated query line is a debug diagnostic on stderr, never stdout
    scantarget()
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.lines().count() == 2));
}

#[test]
fn test_expr_flag_evaluates_arithmetic() {
    scantarget()
        .args(["--expr", "2+2"])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_expr_flag_rejects_untrusted_input() {
    scantarget()
        .args(["--expr", "2+2; drop table users"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: failed to evaluate"));
}

#[test]
fn test_expr_flag_rejects_out_of_range_literals() {
    let literal = "9".repeat(400);
    scantarget()
        .args(["--expr", literal.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed number"));
}

#[test]
fn test_expr_flag_accepts_leading_minus() {
    scantarget()
        .args(["--expr", "-5+10"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_score_flag_totals_the_reference_list() {
    scantarget()
        .args(["--score", "10,60,150"])
        .assert()
        .success()
        .stdout("307\n");
}

#[test]
fn test_score_flag_rejects_non_numeric_entries() {
    scantarget()
        .args(["--score", "10,sixty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number 'sixty'"));
}

#[test]
fn test_user_flag_emits_json() {
    let output = scantarget()
        .args(["--user", "7", "--format", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["user"]["id"], 7);
    assert_eq!(json["user"]["name"], "Demo User");
}

#[test]
fn test_show_config_lists_the_settings() {
    scantarget()
        .arg("--show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_connections: 100"))
        .stdout(predicate::str::contains("timeout: 30"));
}

#[test]
fn test_show_config_json_round_trips() {
    let output = scantarget()
        .args(["--show-config", "--format", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["config"]["debug"], true);
    assert_eq!(json["config"]["log_level"], "info");
    assert_eq!(json["config"]["max_connections"], 100);
    assert_eq!(json["config"]["timeout"], 30);
}

#[test]
fn test_unknown_format_is_rejected_up_front() {
    scantarget()
        .args(["--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format 'yaml'"));
}

#[test]
fn test_flags_combine_in_one_run() {
    scantarget()
        .args(["--show-config", "--user", "3", "--score", "10", "--expr", "1+1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("log_level: info"))
        .stdout(predicate::str::contains("{ id: 3, name: \"Demo User\" }"))
        .stdout(predicate::str::contains("10"))
        .stdout(predicate::str::contains("2"));
}

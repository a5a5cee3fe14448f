mod common;

use common::{json_lines, stderr, stdout, TestEnv};

#[test]
fn check_builtin_catalog_is_valid() {
    let env = TestEnv::new();
    let output = env.run(&["check"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Config: built-in defaults"));
    assert!(out.contains("[OK] 8 skill(s) valid"));
    assert!(out.contains("Summary: 8 valid, 0 errors, 0 warnings"));
}

#[test]
fn check_duplicate_skill_exits_2() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[[skills]]
name = "Python"
base = 88
category = "Languages"

[[skills]]
name = "Python"
base = 60
category = "Languages"
"#,
    );
    let output = env.run(&["check"]);
    assert_eq!(output.status.code(), Some(2));
    let out = stdout(&output);
    assert!(out.contains("duplicate skill 'Python'"), "stdout: {out}");
    assert!(out.contains("1 errors"), "stdout: {out}");
}

#[test]
fn check_reports_unknown_keys_with_suggestion() {
    let env = TestEnv::new();
    env.write_config("[scoring]\nrang = 3\n");
    let output = env.run(&["check"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("unknown key 'rang' in "), "stdout: {out}");
    assert!(out.contains("did you mean 'range'?"), "stdout: {out}");
}

#[test]
fn check_negative_range_is_invalid() {
    let env = TestEnv::new();
    env.write_config("[scoring]\nrange = -4\n");
    let output = env.run(&["check"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid argument 'range'"));
}

#[test]
fn check_json_events() {
    let env = TestEnv::new();
    env.write_config(
        r#"
technologies = ["Rust", "Rust"]

[[skills]]
name = "Python"
base = 140
category = "Languages"

[[skills]]
name = "Java"
base = 65
category = ""
"#,
    );
    let output = env.run(&["--json", "check"]);
    assert_eq!(output.status.code(), Some(2));

    let events = json_lines(&output);
    assert_eq!(events[0]["event"], "start");
    let issues: Vec<_> = events.iter().filter(|e| e["event"] == "issue").collect();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["code"], "base_out_of_range");

    let warnings = events
        .iter()
        .filter(|e| e["event"] == "warning" && e["kind"] == "catalog")
        .count();
    assert_eq!(warnings, 2);

    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["success"], false);
    assert_eq!(complete["count"], 1);
}

#[test]
fn check_malformed_toml_fails() {
    let env = TestEnv::new();
    env.write_config("[scoring\nrange = 3\n");
    let output = env.run(&["check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid config"));
}

#[test]
fn check_oversized_bar_width_is_invalid() {
    let env = TestEnv::new();
    env.write_config("[output]\nbar_width = 201\n");
    let output = env.run(&["check"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid argument 'output.bar_width'"));
}

#[test]
fn check_missing_name_is_invalid_argument() {
    let env = TestEnv::new();
    env.write_config("[[skills]]\nbase = 50\ncategory = \"Data\"\n");
    let output = env.run(&["--json", "check"]);
    assert_eq!(output.status.code(), Some(2));
    let events = json_lines(&output);
    let issue = events.iter().find(|e| e["event"] == "issue").unwrap();
    assert_eq!(issue["code"], "invalid_argument");
    assert_eq!(issue["message"], "invalid argument 'skills[0].name': is required");
}

#[test]
fn check_documented_min_level_is_not_an_unknown_key() {
    let env = TestEnv::new();
    env.write_config("[scoring]\nrange = 3\nmin_level = 40\n");
    let output = env.run(&["check"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(!out.contains("unknown key"), "stdout: {out}");
    assert!(out.contains("Summary: 8 valid, 0 errors, 0 warnings"), "stdout: {out}");
}

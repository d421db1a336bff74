use predicates::prelude::predicate;
use serde_json::{Value, json};

fn parse_stdout_json(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("stdout json")
}

fn parse_stderr_json_lines(stderr: &[u8]) -> Vec<Value> {
    let text = String::from_utf8(stderr.to_vec()).expect("stderr utf8");
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("stderr json line"))
        .collect()
}

#[test]
fn range_match_exits_zero() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("matchq")
        .args(["check", "--match-type", "rg", "--match-value", "10-20", "--value", "15"])
        .output()
        .expect("run check");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        parse_stdout_json(&output.stdout),
        json!({"matched": true, "match_type": "rg"})
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn negative_observed_values_are_accepted() {
    assert_cmd::cargo::cargo_bin_cmd!("matchq")
        .args(["check", "--match-type", "lt", "--expected", "0", "--value", "-3"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(r#""matched":true"#));
}

#[test]
fn mismatch_exits_two() {
    assert_cmd::cargo::cargo_bin_cmd!("matchq")
        .args([
            "check",
            "--match-type",
            "pd",
            "--match-value",
            "10%",
            "--expected",
            r#""{\"value\":5,\"input\":\"hello\"}""#,
            "--value",
            r#""{\"value\":10,\"input\":\"hello\",\"offset\":5}""#,
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(r#""matched":false"#));
}

#[test]
fn empty_check_without_expected_value() {
    assert_cmd::cargo::cargo_bin_cmd!("matchq")
        .args(["check", "--match-type", "et", "--value", "null"])
        .assert()
        .code(0);
}

#[test]
fn unknown_match_type_exits_three() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("matchq")
        .args(["check", "--match-type", "zz", "--value", "1"])
        .output()
        .expect("run check");
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());

    let lines = parse_stderr_json_lines(&output.stderr);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["error"], json!("input_usage_error"));
    assert_eq!(lines[0]["kind"], json!("operator"));
    assert_eq!(lines[0]["message"], json!("invalid match type: zz"));
}

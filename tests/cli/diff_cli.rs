use serde_json::{Value, json};

#[test]
fn diff_reports_tail_and_prefix() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("matchq")
        .args(["diff", "--left", "ab", "--right", "xbc"])
        .output()
        .expect("run diff");
    assert_eq!(output.status.code(), Some(0));

    let payload: Value = serde_json::from_slice(&output.stdout).expect("stdout json");
    assert_eq!(
        payload,
        json!({
            "left_len": 2,
            "right_len": 3,
            "tail": [{"type": "u8", "index": 2, "original": null, "new": 99}],
            "prefix": [{"type": "u8", "index": 0, "original": 97, "new": 120}]
        })
    );
}

#[test]
fn identical_inputs_have_empty_reports() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("matchq")
        .args(["diff", "--left", "same", "--right", "same"])
        .output()
        .expect("run diff");
    assert_eq!(output.status.code(), Some(0));

    let payload: Value = serde_json::from_slice(&output.stdout).expect("stdout json");
    assert_eq!(payload["tail"], json!([]));
    assert_eq!(payload["prefix"], json!([]));
}

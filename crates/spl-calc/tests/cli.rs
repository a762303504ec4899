use std::process::Command;

use serde_json::Value;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_spl-calc"))
}

#[test]
fn combine_prints_steps_and_final_level() {
    let output = cli()
        .args(["combine", "90,85,88"])
        .output()
        .expect("failed to run spl-calc combine");
    assert!(
        output.status.success(),
        "CLI exited with {:?}",
        output.status.code()
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout UTF-8");
    assert!(stdout.starts_with("Calculation Steps"), "got {stdout}");
    assert!(stdout.contains("Step 1: ΔL = 5.00 dB, L+ = 1.19 dB → Combined SPL = 91.19 dB"));
    assert!(stdout.contains("Step 2: ΔL = 3.19 dB"));
    assert!(stdout.contains("Final Combined SPL: 92.89 dB"), "got {stdout}");
}

#[test]
fn combine_accepts_separate_arguments() {
    let output = cli()
        .args(["combine", "90", "90"])
        .output()
        .expect("failed to run spl-calc combine");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout UTF-8");
    assert!(stdout.contains("Final Combined SPL: 93.01 dB"), "got {stdout}");
}

#[test]
fn combine_json_has_full_trace() {
    let output = cli()
        .args(["combine", "90, 85, junk, 88", "--json"])
        .output()
        .expect("failed to run spl-calc combine --json");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout UTF-8");
    let json: Value = serde_json::from_str(stdout.trim()).expect("combine JSON payload");
    assert_eq!(json["trace"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["ignored"][0], "junk");

    let combined = json["combined"].as_f64().expect("combined is a number");
    assert!((combined - 92.8941).abs() < 1e-4, "combined = {combined}");
}

#[test]
fn combine_single_value_warns() {
    let output = cli()
        .args(["combine", "42"])
        .output()
        .expect("failed to run spl-calc combine");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("stderr UTF-8");
    assert!(
        stderr.contains("Please enter at least two SPL values."),
        "got {stderr}"
    );
}

#[test]
fn combine_garbage_is_invalid() {
    let output = cli()
        .args(["combine", "loud,louder"])
        .output()
        .expect("failed to run spl-calc combine");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("stderr UTF-8");
    assert!(stderr.contains("Invalid input."), "got {stderr}");
}

#[test]
fn curve_prints_table() {
    let output = cli()
        .arg("curve")
        .output()
        .expect("failed to run spl-calc curve");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 101, "header plus 100 samples");
    assert_eq!(lines[0], "delta_l_db,l_plus_db");
    assert!(lines[1].starts_with("0.000000,3.0103"));
    assert_eq!(lines[100], "10.000000,0.000000");
}

#[test]
fn curve_writes_file_and_honours_config() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = dir.path().join("spl.json");
    std::fs::write(&config, r#"{ "curve": { "samples": 11 } }"#).expect("write config");
    let table = dir.path().join("curve.csv");

    let output = cli()
        .arg("--config")
        .arg(&config)
        .arg("curve")
        .arg("--output")
        .arg(&table)
        .output()
        .expect("failed to run spl-calc curve --output");
    assert!(output.status.success());

    let written = std::fs::read_to_string(&table).expect("curve file");
    assert_eq!(written.lines().count(), 12);
    assert!(written.contains("\n1.000000,"), "got {written}");
}

#[test]
fn curve_rejects_bad_max_delta() {
    for value in ["--max-delta=NaN", "--max-delta=inf", "--max-delta=-1"] {
        let output = cli()
            .args(["curve", value])
            .output()
            .expect("failed to run spl-calc curve");
        assert_eq!(output.status.code(), Some(1), "{value}");
        assert!(output.stdout.is_empty(), "{value} printed a table");
        let stderr = String::from_utf8(output.stderr).expect("stderr UTF-8");
        assert!(stderr.contains("--max-delta must be"), "{value}: got {stderr}");
    }
}

#[test]
fn combine_superscript_digit_is_invalid() {
    let output = cli()
        .args(["combine", "90,85,²"])
        .output()
        .expect("failed to run spl-calc combine");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("stderr UTF-8");
    assert!(stderr.contains("Invalid input."), "got {stderr}");
}

use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "payday3-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_options_writes_output() {
    let exe = env!("CARGO_BIN_EXE_payday3-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-options", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available options"));
    assert!(content.contains("payday_3_dlc_owned"));
}

#[test]
fn cli_json_report_reflects_options_file() {
    let exe = env!("CARGO_BIN_EXE_payday3-tester");
    let options_path = temp_path("options");
    std::fs::write(
        &options_path,
        r#"{"payday_3_include_overkill": true, "payday_3_dlc_owned": ["Boys In Blue"]}"#,
    )
    .expect("write options");
    let output = Command::new(exe)
        .args(["--report", "json", "--samples", "4", "--seed", "9", "--options"])
        .arg(&options_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(value["datasets"]["difficulty"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["datasets"]["loud_heist"].as_array().map(Vec::len), Some(14));
    assert_eq!(value["datasets"]["stealth_heist"].as_array().map(Vec::len), Some(13));
    assert_eq!(value["previews"].as_array().map(Vec::len), Some(4));
}

#[test]
fn cli_same_seed_same_previews() {
    let exe = env!("CARGO_BIN_EXE_payday3-tester");
    let run = || {
        Command::new(exe)
            .args(["--report", "json", "--samples", "6", "--seed", "42"])
            .output()
            .expect("run cli")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn cli_rejects_out_of_range_weight() {
    let exe = env!("CARGO_BIN_EXE_payday3-tester");
    let options_path = temp_path("bad");
    std::fs::write(&options_path, r#"{"payday_3_stealth_weight": 101}"#).expect("write options");
    let output = Command::new(exe)
        .arg("--options")
        .arg(&options_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("payday_3_stealth_weight"));
}

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_prime-pyramid"))
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("prime-pyramid-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = binary()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn file_mode_prints_sum() {
    let path = temp_file("sum.txt", "1\n8 4\n2 6 9\n8 5 9 3\n");
    let output = binary().arg(&path).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.starts_with(&format!("Trying to open {}...", path.display())));
    assert!(stdout.trim_end().ends_with("Maximum Sum: 24"));
    std::fs::remove_file(path).ok();
}

#[test]
fn missing_file_exits_with_one() {
    let output = binary().arg("/no/such/pyramid.txt").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("can not open input file"));
}

#[test]
fn malformed_file_exits_with_two() {
    let path = temp_file("short.txt", "1\n8 4\n2 6\n");
    let output = binary().arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    std::fs::remove_file(path).ok();
}

#[test]
fn interactive_mode_prompts_for_every_value() {
    let output = run_with_stdin(&[], "2\n4\n6\n9\n");
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.starts_with("No filename supplied.\n"));
    assert!(stdout.contains("Please enter the level count of pyramid: "));
    assert!(stdout.contains("Level 2, Number 2: "));
    assert!(stdout.trim_end().ends_with("Maximum Sum: 13"));
}

#[test]
fn no_path_is_a_normal_exit() {
    let output = run_with_stdin(&[], "1\n5\n");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(output.status.success());
    assert!(stdout.trim_end().ends_with("Maximum sum does not exist."));
}

#[test]
fn huge_level_count_without_values_exits_with_two() {
    let output = run_with_stdin(&[], "1000000\n4\n");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains("input exhausted") || stderr.contains("too large to address"),
        "unexpected stderr: {}",
        stderr
    );

    let output = run_with_stdin(&[], "9223372036854775807\n4\n");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn strict_sink_and_json_flags() {
    let path = temp_file("cut.txt", "4\n3 5\n");
    let output = binary()
        .args(["--report", "strict-sink", "--json"])
        .arg(&path)
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();

    assert!(output.status.success());
    assert!(json["maximum_sum"].is_null());
    std::fs::remove_file(path).ok();
}

#[test]
fn config_file_sets_policies() {
    let config = temp_file("config.json", r#"{ "report": "strict-sink" }"#);
    let pyramid = temp_file("cfg-pyramid.txt", "4\n3 5\n");
    let output = binary()
        .arg("--config")
        .arg(&config)
        .arg(&pyramid)
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim_end().ends_with("Maximum sum does not exist."));

    let output = binary()
        .arg("--config")
        .arg(&config)
        .args(["--report", "best-reachable-suffix", "--show-path"])
        .arg(&pyramid)
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Maximum Sum: 4"));
    assert!(stdout.trim_end().ends_with("Path: 4"));

    std::fs::remove_file(config).ok();
    std::fs::remove_file(pyramid).ok();
}

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use tempfile::TempDir;

/// Get a Command for gradebook
pub fn gradebook() -> Command {
    cargo_bin_cmd!("gradebook")
}

/// Setup a test store in a fresh directory
#[allow(dead_code)]
pub fn setup_test_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    gradebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    dir
}

/// Add a student through the CLI and assert success
#[allow(dead_code)]
pub fn add_student(dir: &TempDir, id: &str, name: &str, scores: [i32; 3]) {
    let [english, c_language, python] = scores.map(|s| s.to_string());
    gradebook()
        .current_dir(dir.path())
        .args([
            "add",
            id,
            name,
            "--english",
            &english,
            "--c-language",
            &c_language,
            "--python",
            &python,
        ])
        .assert()
        .success();
}

/// Run gradebook and return stdout as String
#[allow(dead_code)]
pub fn run_and_get_stdout(dir: &TempDir, args: &[&str]) -> String {
    let output = gradebook()
        .current_dir(dir.path())
        .args(args)
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run gradebook with `--format json` and parse stdout
#[allow(dead_code)]
pub fn run_json(dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let mut full = vec!["--format", "json"];
    full.extend_from_slice(args);
    let stdout = run_and_get_stdout(dir, &full);
    serde_json::from_str(&stdout).unwrap()
}

/// Write an import file into the test directory and return its name
#[allow(dead_code)]
pub fn write_import_file(dir: &TempDir, name: &str, content: &str) -> String {
    fs::write(dir.path().join(name), content).unwrap();
    name.to_string()
}

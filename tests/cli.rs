use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SETTINGS_JS: &str = r#"// Mindcraft configuration
const settings = {
    "minecraft_version": "1.21.4",
    "host": "127.0.0.1",
    "port": process.env.MINECRAFT_PORT || 55916,
    "profiles": [
        "./andy.json",
        // "./profiles/gpt.json",
    ],
    "max_messages": 15,
    "allow_insecure_coding": false,
};
export default settings;
"#;

fn settings_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("settings.js");
    fs::write(&path, SETTINGS_JS).unwrap();
    path
}

fn mindset() -> Command {
    Command::cargo_bin("mindset").unwrap()
}

#[test]
fn no_arguments_shows_welcome() {
    mindset()
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to mindset"));
}

#[test]
fn set_rewrites_only_the_touched_value() {
    let dir = TempDir::new().unwrap();
    let path = settings_file(&dir);

    mindset()
        .args(["--file", path.to_str().unwrap(), "set", "max_messages", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_messages"));

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        SETTINGS_JS.replace("\"max_messages\": 15,", "\"max_messages\": 20,")
    );
    // Comments and the env-var fallback are untouched.
    assert!(written.contains("// Mindcraft configuration"));
    assert!(written.contains("process.env.MINECRAFT_PORT || 55916"));
}

#[test]
fn set_refuses_type_mismatch_and_leaves_file_alone() {
    let dir = TempDir::new().unwrap();
    let path = settings_file(&dir);

    mindset()
        .args(["--file", path.to_str().unwrap(), "set", "max_messages", "lots"])
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&path).unwrap(), SETTINGS_JS);
}

#[test]
fn set_refuses_raw_entries() {
    let dir = TempDir::new().unwrap();
    let path = settings_file(&dir);

    mindset()
        .args(["--file", path.to_str().unwrap(), "set", "port", "25565"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be edited"));

    assert_eq!(fs::read_to_string(&path).unwrap(), SETTINGS_JS);
}

#[test]
fn add_promotes_a_known_alternative() {
    let dir = TempDir::new().unwrap();
    let path = settings_file(&dir);

    mindset()
        .args([
            "--file",
            path.to_str().unwrap(),
            "add",
            "profiles",
            "./profiles/gpt.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Promoted"));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("\"profiles\": [\"./andy.json\", \"./profiles/gpt.json\"],"));
}

#[test]
fn remove_then_get_reflects_the_change() {
    let dir = TempDir::new().unwrap();
    let path = settings_file(&dir);

    mindset()
        .args([
            "--file",
            path.to_str().unwrap(),
            "remove",
            "profiles",
            "./andy.json",
        ])
        .assert()
        .success();

    mindset()
        .args(["--file", path.to_str().unwrap(), "get", "profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn get_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    let path = settings_file(&dir);

    mindset()
        .args(["--file", path.to_str().unwrap(), "get", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown setting"));
}

#[test]
fn list_json_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    let path = settings_file(&dir);

    let output = mindset()
        .args(["--file", path.to_str().unwrap(), "list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["max_messages"]["type"], "number");
    assert_eq!(parsed["max_messages"]["value"], 15.0);
    assert_eq!(parsed["port"]["type"], "raw");
    assert_eq!(
        parsed["profiles"]["alternatives"][0],
        "./profiles/gpt.json"
    );
}

#[test]
fn alternatives_lists_commented_candidates() {
    let dir = TempDir::new().unwrap();
    let path = settings_file(&dir);

    mindset()
        .args(["--file", path.to_str().unwrap(), "alternatives", "profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("./profiles/gpt.json"));
}

#[test]
fn check_distinguishes_candidates() {
    let dir = TempDir::new().unwrap();
    let path = settings_file(&dir);

    mindset()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success();

    let other = dir.path().join("other.js");
    fs::write(&other, "const config = { port: 1 };").unwrap();
    mindset()
        .args(["check", other.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn scan_finds_installations_under_a_root() {
    let dir = TempDir::new().unwrap();
    let install = dir.path().join("mindcraft");
    fs::create_dir(&install).unwrap();
    fs::write(install.join("settings.js"), SETTINGS_JS).unwrap();

    mindset()
        .args(["scan", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("mindcraft"));
}

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

fn write_lproj(root: &Path, code: &str, pairs: &[(&str, &str)]) {
    let lproj = root.join(format!("{code}.lproj"));
    fs::create_dir_all(&lproj).unwrap();
    let body: String = pairs
        .iter()
        .map(|(k, v)| format!("\"{k}\" = \"{v}\";\n"))
        .collect();
    fs::write(lproj.join("Localizable.strings"), body).unwrap();
}

#[test]
fn test_stats_human_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_lproj(root, "en", &[("App.a", "A"), ("App.b", "B")]);
    write_lproj(root, "es", &[("App.a", "una A")]);

    let assert = Command::cargo_bin("locaudit")
        .unwrap()
        .args(["stats", "--base-dir", root.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("=== Stats ==="));
    assert!(stdout.contains("Base language: en (2 keys)"));
    assert!(stdout.contains("Language: es (Spanish)"));
    assert!(stdout.contains("Translated: 1/2"));
    assert!(stdout.contains("Completion: 50.00%"));
}

#[test]
fn test_stats_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_lproj(root, "en", &[("App.a", "A"), ("App.b", "B"), ("App.c", "C")]);
    write_lproj(root, "fr", &[("App.a", "un A"), ("App.b", "un B"), ("App.c", "un C")]);
    write_lproj(root, "es", &[("App.a", "una A")]);

    let assert = Command::cargo_bin("locaudit")
        .unwrap()
        .args(["stats", "--base-dir", root.to_str().unwrap(), "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let body: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(body["summary"]["base_keys"], 3);
    assert_eq!(body["summary"]["languages"], 2);

    let langs = body["languages"].as_array().unwrap();
    let es = langs.iter().find(|l| l["language"] == "es").unwrap();
    assert_eq!(es["translated"], 1);
    assert_eq!(es["missing"], 2);
    let fr = langs.iter().find(|l| l["language"] == "fr").unwrap();
    assert_eq!(fr["completion_percent"], 100.0);
}

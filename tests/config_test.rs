//! Tests for loading configuration from disk.

use showcase::ShowcaseConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("showcase.toml");
    fs::write(
        &path,
        r#"word_url = "http://localhost:8080/word"
fetch_timeout_ms = 1500
offline_words = ["alpha", "beta"]
"#,
    )
    .expect("Failed to write TOML");

    let config = ShowcaseConfig::from_file(&path).expect("Config loads");
    assert_eq!(config.word_url(), "http://localhost:8080/word");
    assert_eq!(*config.fetch_timeout_ms(), 1500);
    assert_eq!(*config.page_size(), 10);
    assert_eq!(config.offline_words(), &vec!["alpha".to_string(), "beta".to_string()]);
}

#[test]
fn test_missing_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = ShowcaseConfig::from_file(dir.path().join("absent.toml")).expect_err("No such file");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "page_size = \"many\"").expect("Failed to write TOML");

    let err = ShowcaseConfig::from_file(&path).expect_err("Wrong type");
    assert!(err.message.contains("Failed to parse config"));
}

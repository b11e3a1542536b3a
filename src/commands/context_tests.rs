use tempfile::TempDir;

use super::*;

#[test]
fn no_config_returns_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    std::fs::write(&path, "not [valid").unwrap();

    let config = load_config(Some(&path), true).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn explicit_config_path_is_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    std::fs::write(&path, "[product]\nname = \"Custom\"\n").unwrap();

    let config = load_config(Some(&path), false).unwrap();
    assert_eq!(config.product.name.as_deref(), Some("Custom"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");
    assert!(load_config(Some(&path), false).is_err());
}

#[test]
fn write_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("report.md");

    write_output(Some(&output_path), "test content").unwrap();
    assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "test content");
}

#[test]
fn write_output_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("reports/2026/vpat.html");

    write_output(Some(&output_path), "<html></html>").unwrap();
    assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "<html></html>");
}

#[test]
fn write_output_to_stdout() {
    assert!(write_output(None, "test content").is_ok());
}

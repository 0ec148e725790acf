use super::*;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_PER_PAGE, ENV_BASE_URL, ENV_CONFIG_PATH};
use std::collections::HashMap;
use std::path::Path;

fn lookup(pairs: Vec<(&'static str, String)>) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<&'static str, String> = pairs.into_iter().collect();
    move |name| map.get(name).cloned()
}

fn path_env(path: &Path) -> (&'static str, String) {
    (ENV_CONFIG_PATH, path.to_string_lossy().into_owned())
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_with(lookup(vec![path_env(&dir.path().join("absent.toml"))]))
        .unwrap();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.per_page, DEFAULT_PER_PAGE);
}

#[test]
fn test_file_values_are_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "base_url = \"http://localhost:8080/v2\"\nper_page = 100\n").unwrap();

    let config = Config::load_with(lookup(vec![path_env(&path)])).unwrap();
    assert_eq!(config.base_url, "http://localhost:8080/v2");
    assert_eq!(config.per_page, 100);
}

#[test]
fn test_env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "base_url = \"http://from-file\"\n").unwrap();

    let config = Config::load_with(lookup(vec![
        path_env(&path),
        (ENV_BASE_URL, "http://from-env".to_string()),
    ]))
    .unwrap();
    assert_eq!(config.base_url, "http://from-env");
}

#[test]
fn test_unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "developer_key = \"oops\"\n").unwrap();

    let err = Config::load_with(lookup(vec![path_env(&path)])).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config"));
}

#[test]
fn test_out_of_range_per_page_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "per_page = 5\n").unwrap();

    assert!(Config::load_with(lookup(vec![path_env(&path)])).is_err());
}

//! Integration-level unit tests for the SettingsEngine public API.

use tabfinder::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use tabfinder::types::errors::SettingsError;
use tabfinder::types::settings::{FinderSettings, StorageBackend};
use tempfile::TempDir;

fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    assert_eq!(engine.load().unwrap(), FinderSettings::default());
}

#[test]
fn test_defaults() {
    let settings = FinderSettings::default();
    assert_eq!(settings.display.preview_chars, 150);
    assert_eq!(settings.popup.command, "open-tab-finder");
    assert_eq!(settings.storage.backend, StorageBackend::Sqlite);
    assert_eq!(settings.logging.filter, "info");
}

#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();
    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("storage.backend", serde_json::json!("memory"))
            .unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings.storage.backend, StorageBackend::Memory);
}

#[test]
fn test_set_value_unknown_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    let err = engine
        .set_value("display.nonexistent", serde_json::json!(1))
        .unwrap_err();
    assert!(matches!(err, SettingsError::InvalidKey(_)));
}

#[test]
fn test_set_value_wrong_type() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    let err = engine
        .set_value("display.preview_chars", serde_json::json!("lots"))
        .unwrap_err();
    assert!(matches!(err, SettingsError::InvalidValue(_)));
    assert_eq!(engine.get_settings().display.preview_chars, 150);
}

#[test]
fn test_empty_key_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    assert!(matches!(
        engine.set_value("", serde_json::json!(1)),
        Err(SettingsError::InvalidKey(_))
    ));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    std::fs::write(engine.get_config_path(), "{ not json").unwrap();
    assert!(matches!(engine.load(), Err(SettingsError::SerializationError(_))));
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine
        .set_value("display.preview_chars", serde_json::json!(40))
        .unwrap();
    engine.reset().unwrap();
    assert_eq!(*engine.get_settings(), FinderSettings::default());

    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), FinderSettings::default());
}

#[rstest::rstest]
#[case("theme.name")]
#[case("popup")]
#[case("logging.filter.level")]
fn test_set_value_only_addresses_known_sections(#[case] key: &str) {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    let err = engine.set_value(key, serde_json::json!("x")).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidKey(_)));
    assert!(!std::path::Path::new(engine.get_config_path()).exists());
}

#[test]
fn test_set_value_fills_optional_field() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine
        .set_value("storage.database_path", serde_json::json!("/tmp/tabs.db"))
        .unwrap();
    assert_eq!(
        engine.get_settings().storage.database_path.as_deref(),
        Some("/tmp/tabs.db")
    );
}

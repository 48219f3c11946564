// TabFinder Settings Engine
// Loads, saves and updates the finder's settings.
// Settings are stored as a JSON file at the platform-specific config path.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::FinderSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<FinderSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &FinderSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: FinderSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise uses `settings.json` in the platform config directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string()
        });

        Self {
            config_path,
            settings: FinderSettings::default(),
        }
    }
}

/// Sections of `FinderSettings` that `set_value` may address.
const SECTIONS: [&str; 4] = ["popup", "display", "storage", "logging"];

fn read_settings(path: &Path) -> Result<Option<FinderSettings>, SettingsError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(SettingsError::IoError(format!("{}: {}", path.display(), e))),
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| SettingsError::SerializationError(format!("{}: {}", path.display(), e)))
}

/// Splits `"section.field"`, rejecting unknown sections and nested paths.
fn split_key(key: &str) -> Result<(&str, &str), SettingsError> {
    match key.split_once('.') {
        Some((section, field))
            if SECTIONS.contains(&section) && !field.is_empty() && !field.contains('.') =>
        {
            Ok((section, field))
        }
        _ => Err(SettingsError::InvalidKey(format!(
            "'{}' is not of the form <{}>.<field>",
            key,
            SECTIONS.join("|")
        ))),
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// A missing file yields defaults; a malformed one is an error and
    /// leaves the current settings untouched.
    fn load(&mut self) -> Result<FinderSettings, SettingsError> {
        let path = Path::new(&self.config_path);
        self.settings = match read_settings(path)? {
            Some(settings) => settings,
            None => {
                debug!(path = %path.display(), "no settings file, using defaults");
                FinderSettings::default()
            }
        };
        Ok(self.settings.clone())
    }

    /// Writes the current settings, creating parent directories as needed.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);
        let io_err = |e: io::Error| SettingsError::IoError(format!("{}: {}", path.display(), e));

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(&self.settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        fs::write(path, json).map_err(io_err)
    }

    fn get_settings(&self) -> &FinderSettings {
        &self.settings
    }

    /// Updates one field, addressed as `"section.field"`, and saves.
    ///
    /// e.g. `"display.preview_chars"` or `"storage.backend"`. The new value
    /// must deserialize into the field's type.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        let (section, field) = split_key(key)?;

        let mut tree = serde_json::to_value(&self.settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        let slot = tree
            .get_mut(section)
            .and_then(|s| s.get_mut(field))
            .ok_or_else(|| SettingsError::InvalidKey(format!("unknown setting '{}'", key)))?;
        *slot = value;

        self.settings = serde_json::from_value(tree)
            .map_err(|e| SettingsError::InvalidValue(format!("{}: {}", key, e)))?;
        info!(key, "setting updated");
        self.save()
    }

    /// Restores defaults and saves.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = FinderSettings::default();
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}

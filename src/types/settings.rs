use serde::{Deserialize, Serialize};

/// Globe emoji in an SVG data URL, shown whenever a tab's favicon is absent or rejected.
pub const PLACEHOLDER_ICON: &str = "data:image/svg+xml,<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 16 16\"><text y=\"12\" font-size=\"12\">🌐</text></svg>";

/// Top-level settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FinderSettings {
    pub popup: PopupSettings,
    pub display: DisplaySettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

/// How the popup is opened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopupSettings {
    /// Well-known URL of the popup page; used to detect an already-open popup.
    pub url: String,
    /// Keyboard command name that opens the popup.
    pub command: String,
}

impl Default for PopupSettings {
    fn default() -> Self {
        Self {
            url: "chrome-extension://tabfinder/popup.html".to_string(),
            command: "open-tab-finder".to_string(),
        }
    }
}

/// Result row presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplaySettings {
    pub preview_chars: usize,
    pub placeholder_icon: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            preview_chars: 150,
            placeholder_icon: PLACEHOLDER_ICON.to_string(),
        }
    }
}

/// Where tab open-timestamps are persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    /// Overrides the default `<data dir>/tabfinder.db`.
    pub database_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

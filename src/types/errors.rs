use std::fmt;

use super::tab::TabId;

// === TabSourceError ===

/// Errors reported while listing open tabs.
#[derive(Debug, Clone, PartialEq)]
pub enum TabSourceError {
    /// The environment cannot list tabs at all.
    Unavailable(String),
    /// The listing call itself reported an error.
    QueryFailed(String),
}

impl fmt::Display for TabSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabSourceError::Unavailable(msg) => write!(f, "Tab API not available: {}", msg),
            TabSourceError::QueryFailed(msg) => write!(f, "Error loading tabs: {}", msg),
        }
    }
}

impl std::error::Error for TabSourceError {}

// === ActivationError ===

/// Errors reported when a tab could not be brought to focus.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivationError {
    /// The activation request did not succeed.
    Failed { tab_id: TabId, reason: String },
}

impl fmt::Display for ActivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationError::Failed { tab_id, reason } => {
                write!(f, "Failed to switch to tab {}: {}", tab_id, reason)
            }
        }
    }
}

impl std::error::Error for ActivationError {}

// === FaviconError ===

/// Errors raised when a favicon value cannot be trusted.
#[derive(Debug, Clone, PartialEq)]
pub enum FaviconError {
    /// The value is not a safe image URL.
    Malformed(String),
}

impl fmt::Display for FaviconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaviconError::Malformed(reason) => write!(f, "Malformed favicon URL: {}", reason),
        }
    }
}

impl std::error::Error for FaviconError {}

// === StoreError ===

/// Errors related to timestamp persistence.
#[derive(Debug)]
pub enum StoreError {
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DatabaseError(msg) => write!(f, "Timestamp store database error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::DatabaseError(e.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// File I/O error.
    IoError(String),
    /// Serialization or deserialization failed.
    SerializationError(String),
    /// The settings key is invalid.
    InvalidKey(String),
    /// The settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => write!(f, "Invalid settings value: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

// === DispatchError ===

/// Errors raised while opening or focusing the popup.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchError {
    /// The host could not create the popup tab.
    HostFailed(String),
    /// The existing popup could not be focused.
    Activation(ActivationError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::HostFailed(msg) => write!(f, "Failed to open popup: {}", msg),
            DispatchError::Activation(e) => write!(f, "Failed to focus popup: {}", e),
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::HostFailed(_) => None,
            DispatchError::Activation(e) => Some(e),
        }
    }
}

impl From<ActivationError> for DispatchError {
    fn from(e: ActivationError) -> Self {
        DispatchError::Activation(e)
    }
}

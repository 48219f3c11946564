// TabFinder platform paths
// Resolves where settings and the timestamp database live on each OS.
//
// `TABFINDER_HOME` overrides both directories, which keeps the extension
// host and tests away from the user's real profile.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

const HOME_OVERRIDE: &str = "TABFINDER_HOME";

fn home_override() -> Option<PathBuf> {
    env::var(HOME_OVERRIDE)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Returns the configuration directory for TabFinder.
///
/// - **Linux**: `~/.config/tabfinder` (or `$XDG_CONFIG_HOME/tabfinder`)
/// - **macOS**: `~/Library/Application Support/TabFinder`
/// - **Windows**: `%APPDATA%/TabFinder`
pub fn get_config_dir() -> PathBuf {
    if let Some(dir) = home_override() {
        return dir;
    }
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the data directory holding `tabfinder.db`.
///
/// - **Linux**: `~/.local/share/tabfinder` (or `$XDG_DATA_HOME/tabfinder`)
/// - **macOS**: `~/Library/Application Support/TabFinder`
/// - **Windows**: `%APPDATA%/TabFinder`
pub fn get_data_dir() -> PathBuf {
    if let Some(dir) = home_override() {
        return dir;
    }
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

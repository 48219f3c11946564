// TabFinder platform paths for Linux
// Config: ~/.config/tabfinder
// Data:   ~/.local/share/tabfinder

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// `$XDG_CONFIG_HOME/tabfinder`, falling back to `~/.config/tabfinder`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("tabfinder"),
        _ => home_dir().join(".config").join("tabfinder"),
    }
}

/// `$XDG_DATA_HOME/tabfinder`, falling back to `~/.local/share/tabfinder`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("tabfinder"),
        _ => home_dir().join(".local").join("share").join("tabfinder"),
    }
}

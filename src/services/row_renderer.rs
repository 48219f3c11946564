//! Row Renderer for TabFinder.
//!
//! Converts ranked results into plain row models for the popup UI. Rows are
//! built by assigning fields; tab titles, URLs and favicons never pass
//! through a markup string, and untrusted favicon values are replaced with
//! a fixed placeholder when they fail validation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::errors::FaviconError;
use crate::types::ranking::RankedResult;
use crate::types::settings::DisplaySettings;
use crate::types::tab::{TabId, WindowId};

const SCHEMES: &[&str] = &["http://", "https://", "chrome://", "chrome-extension://"];

const DATA_IMAGE_TYPES: &[&str] = &[
    "data:image/png",
    "data:image/x-icon",
    "data:image/vnd.microsoft.icon",
    "data:image/gif",
    "data:image/jpeg",
    "data:image/webp",
];

/// One row of the result list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultRow {
    pub index: usize,
    pub selected: bool,
    pub tab_id: TabId,
    pub window_id: WindowId,
    pub title: String,
    pub url: String,
    pub preview: String,
    pub favicon: String,
    pub opened_label: String,
    pub window_label: String,
    pub audible: bool,
    pub pinned: bool,
}

/// What the result area shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ViewBody {
    Loading,
    Rows(Vec<ResultRow>),
    Empty(String),
    Error(String),
}

/// Everything the popup needs to draw itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopupView {
    pub query: String,
    pub clear_visible: bool,
    pub count_label: String,
    pub body: ViewBody,
}

/// Builds row models from ranked results.
pub struct RowRenderer {
    settings: DisplaySettings,
}

impl RowRenderer {
    pub fn new(settings: DisplaySettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    /// Renders every result, marking the one at `selected`.
    pub fn render_rows(&self, results: &[RankedResult], selected: usize, now: i64) -> Vec<ResultRow> {
        results
            .iter()
            .enumerate()
            .map(|(index, result)| {
                let tab = &result.tab;
                let title = if tab.title.is_empty() {
                    "Untitled".to_string()
                } else {
                    tab.title.clone()
                };
                ResultRow {
                    index,
                    selected: index == selected,
                    tab_id: tab.id,
                    window_id: tab.window_id,
                    title,
                    url: tab.url.clone(),
                    preview: tab.searchable_text.chars().take(self.settings.preview_chars).collect(),
                    favicon: self.favicon_for(tab.id, tab.fav_icon_url.as_deref()),
                    opened_label: format_time_ago(tab.opened_at, now),
                    window_label: format!("Window {}", tab.window_id),
                    audible: tab.audible,
                    pinned: tab.pinned,
                }
            })
            .collect()
    }

    /// The favicon to display, or the placeholder if the value is absent or unsafe.
    pub fn favicon_for(&self, tab_id: TabId, raw: Option<&str>) -> String {
        match sanitize_favicon(raw) {
            Ok(Some(url)) => url,
            Ok(None) => self.settings.placeholder_icon.clone(),
            Err(e) => {
                debug!(tab_id, error = %e, "substituting placeholder favicon");
                self.settings.placeholder_icon.clone()
            }
        }
    }
}

impl Default for RowRenderer {
    fn default() -> Self {
        Self::new(DisplaySettings::default())
    }
}

/// "N tab found" / "N tabs found".
pub fn count_label(count: usize) -> String {
    format!("{} tab{} found", count, if count == 1 { "" } else { "s" })
}

/// Human-readable age of a tab, e.g. "Just now", "5m ago", "3h ago", "2d ago".
pub fn format_time_ago(timestamp: i64, now: i64) -> String {
    let seconds = now.saturating_sub(timestamp).div_euclid(1000);
    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{}h ago", seconds / 3600)
    } else {
        format!("{}d ago", seconds / 86400)
    }
}

/// Validates a favicon URL reported by the browser.
///
/// Returns `Ok(None)` when there is no favicon, `Ok(Some(url))` for a safe
/// image URL, and `Err` for anything that could be read as markup or script.
pub fn sanitize_favicon(raw: Option<&str>) -> Result<Option<String>, FaviconError> {
    let value = match raw {
        Some(v) if !v.is_empty() => v,
        _ => return Ok(None),
    };

    if let Some(c) = value
        .chars()
        .find(|c| matches!(c, '<' | '>' | '"' | '\'' | '`') || c.is_whitespace() || c.is_control())
    {
        return Err(FaviconError::Malformed(format!("forbidden character {:?}", c)));
    }

    let lower = value.to_ascii_lowercase();
    if lower.starts_with("data:") {
        if DATA_IMAGE_TYPES.iter().any(|t| {
            lower.starts_with(t) && matches!(lower.as_bytes().get(t.len()), Some(b';') | Some(b','))
        }) {
            return Ok(Some(value.to_string()));
        }
        return Err(FaviconError::Malformed("unsupported data URL type".to_string()));
    }

    if SCHEMES.iter().any(|s| lower.starts_with(s)) {
        return Ok(Some(value.to_string()));
    }
    Err(FaviconError::Malformed("unsupported scheme".to_string()))
}

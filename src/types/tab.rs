use serde::{Deserialize, Serialize};

/// Browser-assigned tab identifier, stable for the lifetime of the tab.
pub type TabId = i64;

/// Browser-assigned window identifier.
pub type WindowId = i64;

/// A tab descriptor as reported by the browser's tab listing API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawTab {
    pub id: TabId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    pub window_id: WindowId,
    #[serde(default)]
    pub fav_icon_url: Option<String>,
    #[serde(default)]
    pub audible: bool,
    #[serde(default)]
    pub pinned: bool,
}

/// An open tab as held by the tab index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabRecord {
    pub id: TabId,
    pub title: String,
    pub url: String,
    pub window_id: WindowId,
    /// Untrusted; never rendered without going through the favicon sanitiser.
    pub fav_icon_url: Option<String>,
    pub audible: bool,
    pub pinned: bool,
    /// Epoch milliseconds at which the index first saw this tab.
    pub opened_at: i64,
    pub searchable_text: String,
}

impl TabRecord {
    /// Builds a record from a live descriptor, deriving the searchable text.
    pub fn from_raw(raw: &RawTab, opened_at: i64) -> Self {
        Self {
            id: raw.id,
            title: raw.title.clone(),
            url: raw.url.clone(),
            window_id: raw.window_id,
            fav_icon_url: raw.fav_icon_url.clone(),
            audible: raw.audible,
            pinned: raw.pinned,
            opened_at,
            searchable_text: searchable_text(&raw.title, &raw.url),
        }
    }
}

/// Title and URL joined by a single space.
pub fn searchable_text(title: &str, url: &str) -> String {
    format!("{} {}", title, url)
}

//! Popup Dispatcher for TabFinder.
//!
//! Reacts to the toolbar icon and the keyboard command. If a popup tab is
//! already open at the popup URL it is focused; otherwise the host is asked
//! to open a new one. Also forwards tab-created notifications to the index so
//! new tabs get an open time as soon as they appear.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::managers::tab_index::{TabIndex, TabIndexTrait};
use crate::services::browser_api::{ActivationRequest, TabActivator};
use crate::types::errors::DispatchError;
use crate::types::settings::PopupSettings;
use crate::types::tab::{TabId, WindowId};

/// What asked for the popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum PopupTrigger {
    IconClicked,
    Command(String),
}

/// What the dispatcher did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DispatchOutcome {
    Created { url: String },
    Focused(ActivationRequest),
    Ignored,
}

/// Browser operations needed to open the popup.
pub trait PopupHost {
    /// The tab currently showing `url`, if any.
    fn find_tab_by_url(&self, url: &str) -> Option<ActivationRequest>;
    fn create_tab(&mut self, url: &str) -> Result<(), DispatchError>;
}

/// An open tab as reported by the host: its URL and where it lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostTab {
    pub url: String,
    pub tab_id: TabId,
    pub window_id: WindowId,
}

/// Host state captured by the extension before asking for a dispatch.
///
/// Lookups compare the reported URLs against the popup URL. Tab creation is
/// queued for the host to perform.
#[derive(Debug, Default)]
pub struct HostSnapshot {
    open_tabs: Vec<HostTab>,
    created: Vec<String>,
}

impl HostSnapshot {
    pub fn new(open_tabs: Vec<HostTab>) -> Self {
        Self {
            open_tabs,
            created: Vec::new(),
        }
    }

    pub fn created(&self) -> &[String] {
        &self.created
    }
}

impl PopupHost for HostSnapshot {
    fn find_tab_by_url(&self, url: &str) -> Option<ActivationRequest> {
        self.open_tabs
            .iter()
            .find(|tab| tab.url == url)
            .map(|tab| ActivationRequest {
                tab_id: tab.tab_id,
                window_id: tab.window_id,
            })
    }

    fn create_tab(&mut self, url: &str) -> Result<(), DispatchError> {
        self.created.push(url.to_string());
        Ok(())
    }
}

/// Opens or focuses the popup.
pub struct PopupDispatcher {
    popup_url: String,
    command: String,
}

impl PopupDispatcher {
    pub fn new(settings: &PopupSettings) -> Self {
        Self {
            popup_url: settings.url.clone(),
            command: settings.command.clone(),
        }
    }

    pub fn popup_url(&self) -> &str {
        &self.popup_url
    }

    /// Handles a trigger. Commands other than the configured one are ignored.
    pub fn dispatch(
        &self,
        trigger: &PopupTrigger,
        host: &mut dyn PopupHost,
        activator: &mut dyn TabActivator,
    ) -> Result<DispatchOutcome, DispatchError> {
        if let PopupTrigger::Command(name) = trigger {
            if *name != self.command {
                debug!(command = %name, "ignoring unknown command");
                return Ok(DispatchOutcome::Ignored);
            }
        }

        if let Some(existing) = host.find_tab_by_url(&self.popup_url) {
            activator.activate(existing.tab_id, existing.window_id)?;
            info!(tab_id = existing.tab_id, "focused existing popup");
            return Ok(DispatchOutcome::Focused(existing));
        }

        host.create_tab(&self.popup_url)?;
        info!(url = %self.popup_url, "opened popup");
        Ok(DispatchOutcome::Created {
            url: self.popup_url.clone(),
        })
    }

    /// Stamps a newly created tab with its open time.
    pub fn on_tab_created(&self, index: &mut TabIndex, tab_id: TabId, now: i64) {
        index.record_created(tab_id, now);
    }
}

//! Browser collaborator interfaces for TabFinder.
//!
//! The core never talks to the browser directly. Tab listing and tab
//! activation go through these traits so the engine can run against the
//! real extension host, the RPC bridge, or test doubles.

use serde::{Deserialize, Serialize};

use crate::types::errors::{ActivationError, TabSourceError};
use crate::types::tab::{RawTab, TabId, WindowId};

/// Lists the browser's open tabs.
pub trait TabSource {
    fn list_open_tabs(&self) -> Result<Vec<RawTab>, TabSourceError>;
}

/// Brings a tab and its window to focus.
pub trait TabActivator {
    fn activate(&mut self, tab_id: TabId, window_id: WindowId) -> Result<(), ActivationError>;
}

/// A tab/window pair the host is asked to focus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivationRequest {
    pub tab_id: TabId,
    pub window_id: WindowId,
}

/// Tab source backed by a listing the host already captured.
#[derive(Debug, Clone)]
pub struct SnapshotTabSource {
    listing: Result<Vec<RawTab>, TabSourceError>,
}

impl SnapshotTabSource {
    pub fn new(tabs: Vec<RawTab>) -> Self {
        Self { listing: Ok(tabs) }
    }

    pub fn failed(error: TabSourceError) -> Self {
        Self { listing: Err(error) }
    }
}

impl TabSource for SnapshotTabSource {
    fn list_open_tabs(&self) -> Result<Vec<RawTab>, TabSourceError> {
        self.listing.clone()
    }
}

/// Activator that queues requests for the host to carry out later.
///
/// Queuing always succeeds; a failure on the host side comes back through
/// `PopupSession::report_activation_failure`.
#[derive(Debug, Default)]
pub struct QueuedActivator {
    requests: Vec<ActivationRequest>,
}

impl QueuedActivator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[ActivationRequest] {
        &self.requests
    }

    /// Removes and returns every queued request.
    pub fn drain(&mut self) -> Vec<ActivationRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl TabActivator for QueuedActivator {
    fn activate(&mut self, tab_id: TabId, window_id: WindowId) -> Result<(), ActivationError> {
        self.requests.push(ActivationRequest { tab_id, window_id });
        Ok(())
    }
}

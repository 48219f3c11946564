//! Popup Session for TabFinder.
//!
//! One session per open popup. It owns the tab index, the query text and the
//! selection, and drives them through the Loading → Ready cycle:
//!
//! - a refresh or query edit re-filters the records and resets the cursor
//! - Up/Down move the cursor, Enter activates, Escape clears the query
//! - a failed tab listing puts the session in an error state that still
//!   accepts queries and clears on the next successful refresh

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::managers::selection_controller::{SelectionController, SelectionControllerTrait};
use crate::managers::tab_index::{TabIndex, TabIndexTrait};
use crate::managers::timestamp_store::TimestampStore;
use crate::services::browser_api::{ActivationRequest, TabActivator, TabSource};
use crate::services::ranker;
use crate::services::row_renderer::{count_label, PopupView, RowRenderer, ViewBody};
use crate::types::errors::{ActivationError, TabSourceError};
use crate::types::ranking::RankedResult;

const NO_MATCHES: &str = "No tabs found matching your search";

/// Lifecycle state of the popup.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Loading,
    Ready,
    Error(TabSourceError),
}

/// Keys the search input reacts to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

impl Key {
    /// Parses a DOM `KeyboardEvent.key` value.
    pub fn parse(name: &str) -> Option<Key> {
        match name {
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowUp" => Some(Key::ArrowUp),
            "Enter" => Some(Key::Enter),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    Moved,
    Activated(ActivationRequest),
    NothingToActivate,
    ActivationFailed(ActivationError),
    QueryCleared,
}

/// State of one popup instance.
pub struct PopupSession {
    index: TabIndex,
    query: String,
    selection: SelectionController,
    state: SessionState,
    last_error: Option<ActivationError>,
}

impl PopupSession {
    pub fn new(store: Box<dyn TimestampStore>) -> Self {
        Self {
            index: TabIndex::new(store),
            query: String::new(),
            selection: SelectionController::new(),
            state: SessionState::Loading,
            last_error: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn index(&self) -> &TabIndex {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut TabIndex {
        &mut self.index
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn results(&self) -> &[RankedResult] {
        self.selection.results()
    }

    /// The most recent activation failure, if the last attempt failed.
    pub fn last_error(&self) -> Option<&ActivationError> {
        self.last_error.as_ref()
    }

    pub fn refresh(&mut self, source: &dyn TabSource) -> Result<usize, TabSourceError> {
        self.refresh_at(source, TabIndex::now())
    }

    /// Reloads the tab listing and re-applies the current query.
    ///
    /// On failure the records are cleared and the session enters the error
    /// state; the error is also returned to the caller.
    pub fn refresh_at(&mut self, source: &dyn TabSource, now: i64) -> Result<usize, TabSourceError> {
        match source.list_open_tabs() {
            Ok(tabs) => {
                let count = self.index.refresh_at(&tabs, now).len();
                info!(count, "loaded tabs");
                self.state = SessionState::Ready;
                self.recompute();
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "tab listing failed");
                self.index.clear_records();
                self.state = SessionState::Error(e.clone());
                self.recompute();
                Err(e)
            }
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.recompute();
    }

    /// Empties the query and shows every tab again.
    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    fn recompute(&mut self) {
        let results = ranker::filter(self.index.records(), &self.query);
        debug!(query = %self.query, matches = results.len(), "filtered tabs");
        self.selection.set_results(results);
    }

    pub fn handle_key(&mut self, key: Key, activator: &mut dyn TabActivator) -> KeyOutcome {
        match key {
            Key::ArrowDown => {
                self.selection.move_down();
                KeyOutcome::Moved
            }
            Key::ArrowUp => {
                self.selection.move_up();
                KeyOutcome::Moved
            }
            Key::Enter => match self.activate_selected(activator) {
                Ok(Some(request)) => KeyOutcome::Activated(request),
                Ok(None) => KeyOutcome::NothingToActivate,
                Err(e) => KeyOutcome::ActivationFailed(e),
            },
            Key::Escape => {
                self.clear_query();
                KeyOutcome::QueryCleared
            }
        }
    }

    pub fn activate_selected(
        &mut self,
        activator: &mut dyn TabActivator,
    ) -> Result<Option<ActivationRequest>, ActivationError> {
        let outcome = self.selection.activate_selected(activator);
        self.note_activation(&outcome);
        outcome
    }

    /// Activates the row at `index`, as when the user clicks it.
    pub fn click(
        &mut self,
        index: usize,
        activator: &mut dyn TabActivator,
    ) -> Result<Option<ActivationRequest>, ActivationError> {
        let outcome = self.selection.activate_at(index, activator);
        self.note_activation(&outcome);
        outcome
    }

    /// Records a failure the host reported after accepting a request.
    pub fn report_activation_failure(&mut self, error: ActivationError) {
        warn!(error = %error, "activation failed");
        self.last_error = Some(error);
    }

    fn note_activation(&mut self, outcome: &Result<Option<ActivationRequest>, ActivationError>) {
        match outcome {
            Ok(Some(_)) => self.last_error = None,
            Ok(None) => {}
            Err(e) => self.last_error = Some(e.clone()),
        }
    }

    /// Builds the popup's view model.
    pub fn view(&self, renderer: &RowRenderer, now: i64) -> PopupView {
        let count = self.selection.len();
        let body = match &self.state {
            SessionState::Loading => ViewBody::Loading,
            SessionState::Error(e) => ViewBody::Error(e.to_string()),
            SessionState::Ready if count == 0 => ViewBody::Empty(NO_MATCHES.to_string()),
            SessionState::Ready => ViewBody::Rows(renderer.render_rows(
                self.selection.results(),
                self.selection.selected_index(),
                now,
            )),
        };

        PopupView {
            query: self.query.clone(),
            clear_visible: !self.query.is_empty(),
            count_label: count_label(count),
            body,
        }
    }
}

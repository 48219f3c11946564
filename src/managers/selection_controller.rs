//! Selection Controller for TabFinder.
//!
//! Owns the ranked result list and the keyboard cursor over it.

use tracing::warn;

use crate::services::browser_api::{ActivationRequest, TabActivator};
use crate::types::errors::ActivationError;
use crate::types::ranking::RankedResult;
use crate::types::tab::TabRecord;

/// Trait defining selection operations.
pub trait SelectionControllerTrait {
    fn set_results(&mut self, results: Vec<RankedResult>);
    fn move_down(&mut self);
    fn move_up(&mut self);
    fn reset(&mut self);
    fn current(&self) -> Option<&TabRecord>;
    fn selected_index(&self) -> usize;
    fn results(&self) -> &[RankedResult];
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn activate_selected(
        &self,
        activator: &mut dyn TabActivator,
    ) -> Result<Option<ActivationRequest>, ActivationError>;
    fn activate_at(
        &self,
        index: usize,
        activator: &mut dyn TabActivator,
    ) -> Result<Option<ActivationRequest>, ActivationError>;
}

/// Cursor over the current result list.
///
/// The index stays within `[0, len - 1]`; on an empty list it is 0 and ignored.
#[derive(Debug, Default)]
pub struct SelectionController {
    results: Vec<RankedResult>,
    selected: usize,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    fn activate(
        tab: &TabRecord,
        activator: &mut dyn TabActivator,
    ) -> Result<Option<ActivationRequest>, ActivationError> {
        activator.activate(tab.id, tab.window_id).map_err(|e| {
            warn!(tab_id = tab.id, error = %e, "error switching to tab");
            e
        })?;
        Ok(Some(ActivationRequest {
            tab_id: tab.id,
            window_id: tab.window_id,
        }))
    }
}

impl SelectionControllerTrait for SelectionController {
    /// Replaces the result list and moves the cursor back to the top.
    fn set_results(&mut self, results: Vec<RankedResult>) {
        self.results = results;
        self.reset();
    }

    fn move_down(&mut self) {
        if self.selected + 1 < self.results.len() {
            self.selected += 1;
        }
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn reset(&mut self) {
        self.selected = 0;
    }

    fn current(&self) -> Option<&TabRecord> {
        self.results.get(self.selected).map(|r| &r.tab)
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn results(&self) -> &[RankedResult] {
        &self.results
    }

    fn len(&self) -> usize {
        self.results.len()
    }

    fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Asks the activator to focus the selected tab and its window.
    ///
    /// Returns `Ok(None)` when there is nothing selected. Failures are not
    /// retried and leave the cursor where it was.
    fn activate_selected(
        &self,
        activator: &mut dyn TabActivator,
    ) -> Result<Option<ActivationRequest>, ActivationError> {
        match self.current() {
            Some(tab) => Self::activate(tab, activator),
            None => Ok(None),
        }
    }

    /// Activates the row at `index` (a pointer click) without moving the cursor.
    fn activate_at(
        &self,
        index: usize,
        activator: &mut dyn TabActivator,
    ) -> Result<Option<ActivationRequest>, ActivationError> {
        match self.results.get(index) {
            Some(result) => Self::activate(&result.tab, activator),
            None => Ok(None),
        }
    }
}

//! Tab Index for TabFinder.
//!
//! Holds the current set of open tabs and the first-seen timestamp of each.
//! Every refresh rebuilds the records from the live listing, keeps the
//! timestamps of tabs seen before (including those persisted by an earlier
//! run), and drops the timestamps of tabs that have closed.

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::managers::timestamp_store::{TimestampMap, TimestampStore};
use crate::types::tab::{RawTab, TabId, TabRecord};

/// Trait defining the tab index interface.
pub trait TabIndexTrait {
    fn refresh(&mut self, live_tabs: &[RawTab]) -> &[TabRecord];
    fn refresh_at(&mut self, live_tabs: &[RawTab], now: i64) -> &[TabRecord];
    fn record_created(&mut self, tab_id: TabId, now: i64);
    fn clear_records(&mut self);
    fn records(&self) -> &[TabRecord];
    fn opened_at(&self, tab_id: TabId) -> Option<i64>;
    fn timestamps(&self) -> &TimestampMap;
}

/// In-memory tab index backed by an injected timestamp store.
pub struct TabIndex {
    store: Box<dyn TimestampStore>,
    timestamps: TimestampMap,
    records: Vec<TabRecord>,
}

impl TabIndex {
    /// Creates an index, loading persisted timestamps from `store`.
    ///
    /// A store that cannot be read is treated as empty.
    pub fn new(store: Box<dyn TimestampStore>) -> Self {
        let timestamps = match store.load_timestamps() {
            Ok(map) => {
                debug!(count = map.len(), "loaded tab open times");
                map
            }
            Err(e) => {
                warn!(error = %e, "could not load tab open times; starting empty");
                TimestampMap::new()
            }
        };

        Self {
            store,
            timestamps,
            records: Vec::new(),
        }
    }

    /// Current time in epoch milliseconds.
    pub fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Saves the timestamp map. Failures are logged, never retried.
    fn persist(&mut self) {
        if let Err(e) = self.store.save_timestamps(&self.timestamps) {
            warn!(error = %e, "could not save tab open times");
        }
    }
}

impl TabIndexTrait for TabIndex {
    fn refresh(&mut self, live_tabs: &[RawTab]) -> &[TabRecord] {
        self.refresh_at(live_tabs, Self::now())
    }

    /// Rebuilds the records from `live_tabs`, in listing order.
    ///
    /// Tabs not seen before get `now` as their open time. Timestamps of
    /// tabs missing from the listing are pruned, then the map is saved.
    fn refresh_at(&mut self, live_tabs: &[RawTab], now: i64) -> &[TabRecord] {
        let mut records = Vec::with_capacity(live_tabs.len());
        for raw in live_tabs {
            let opened_at = *self.timestamps.entry(raw.id).or_insert(now);
            records.push(TabRecord::from_raw(raw, opened_at));
        }

        let live_ids: HashSet<TabId> = live_tabs.iter().map(|t| t.id).collect();
        let before = self.timestamps.len();
        self.timestamps.retain(|id, _| live_ids.contains(id));
        let pruned = before - self.timestamps.len();
        if pruned > 0 {
            debug!(pruned, "pruned open times of closed tabs");
        }

        self.persist();
        self.records = records;
        &self.records
    }

    /// Records the open time of a tab the browser just created.
    ///
    /// An id that already has a timestamp keeps it.
    fn record_created(&mut self, tab_id: TabId, now: i64) {
        if self.timestamps.contains_key(&tab_id) {
            return;
        }
        self.timestamps.insert(tab_id, now);
        self.persist();
    }

    /// Drops the records after a failed listing. Timestamps are kept so a
    /// later successful refresh does not reset them.
    fn clear_records(&mut self) {
        self.records.clear();
    }

    fn records(&self) -> &[TabRecord] {
        &self.records
    }

    fn opened_at(&self, tab_id: TabId) -> Option<i64> {
        self.timestamps.get(&tab_id).copied()
    }

    fn timestamps(&self) -> &TimestampMap {
        &self.timestamps
    }
}

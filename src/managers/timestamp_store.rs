//! Timestamp Store for TabFinder.
//!
//! Persists the tab id → first-seen timestamp mapping. The backend is picked
//! once, when the `App` is built: SQLite when a database is available, an
//! in-memory map otherwise.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use rusqlite::params;

use crate::database::connection::Database;
use crate::types::errors::StoreError;
use crate::types::tab::TabId;

/// Tab id → epoch milliseconds at which the tab was first seen.
pub type TimestampMap = HashMap<TabId, i64>;

/// Persistence capability for tab open-times.
pub trait TimestampStore {
    /// Loads every stored timestamp. Callers treat failure as an empty map.
    fn load_timestamps(&self) -> Result<TimestampMap, StoreError>;
    /// Replaces the stored mapping with `timestamps`.
    fn save_timestamps(&mut self, timestamps: &TimestampMap) -> Result<(), StoreError>;
}

/// In-memory store for environments without persistent storage.
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// the index saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryTimestampStore {
    entries: Rc<RefCell<TimestampMap>>,
}

impl MemoryTimestampStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `entries`, as if left by an earlier run.
    pub fn with_entries(entries: TimestampMap) -> Self {
        Self {
            entries: Rc::new(RefCell::new(entries)),
        }
    }

    pub fn snapshot(&self) -> TimestampMap {
        self.entries.borrow().clone()
    }
}

impl TimestampStore for MemoryTimestampStore {
    fn load_timestamps(&self) -> Result<TimestampMap, StoreError> {
        Ok(self.snapshot())
    }

    fn save_timestamps(&mut self, timestamps: &TimestampMap) -> Result<(), StoreError> {
        *self.entries.borrow_mut() = timestamps.clone();
        Ok(())
    }
}

/// Store backed by the `tab_open_times` SQLite table.
pub struct SqliteTimestampStore {
    db: Arc<Database>,
}

impl SqliteTimestampStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl TimestampStore for SqliteTimestampStore {
    fn load_timestamps(&self) -> Result<TimestampMap, StoreError> {
        let conn = self.db.connection();
        let mut stmt = conn.prepare("SELECT tab_id, opened_at FROM tab_open_times")?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?;

        let mut map = TimestampMap::new();
        for row in rows {
            let (tab_id, opened_at) = row?;
            map.insert(tab_id, opened_at);
        }
        Ok(map)
    }

    /// Rewrites the whole table in one transaction, which also drops stale ids.
    fn save_timestamps(&mut self, timestamps: &TimestampMap) -> Result<(), StoreError> {
        let tx = self.db.connection().unchecked_transaction()?;
        tx.execute("DELETE FROM tab_open_times", [])?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO tab_open_times (tab_id, opened_at) VALUES (?1, ?2)")?;
            for (tab_id, opened_at) in timestamps {
                stmt.execute(params![tab_id, opened_at])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}

//! App Core for TabFinder.
//!
//! Composition root: loads settings, picks the timestamp store backend and
//! builds the popup session, renderer and dispatcher from them.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::database::connection::Database;
use crate::managers::popup_dispatcher::PopupDispatcher;
use crate::managers::timestamp_store::{MemoryTimestampStore, SqliteTimestampStore, TimestampStore};
use crate::platform;
use crate::services::row_renderer::RowRenderer;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::session::PopupSession;
use crate::types::settings::{StorageBackend, StorageSettings};

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub session: PopupSession,
    pub renderer: RowRenderer,
    pub dispatcher: PopupDispatcher,
    /// Present when timestamps are persisted to SQLite.
    pub db: Option<Arc<Database>>,
}

impl App {
    /// Loads settings from `settings_path` (or the platform default) and builds the app.
    ///
    /// # Errors
    /// Fails if an existing settings file cannot be read or parsed.
    pub fn new(settings_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        settings_engine.load()?;
        Ok(Self::with_settings(settings_engine))
    }

    /// Builds the app from an already-loaded settings engine.
    pub fn with_settings(settings_engine: SettingsEngine) -> Self {
        let settings = settings_engine.get_settings().clone();
        let (store, db) = Self::open_store(&settings.storage);

        Self {
            session: PopupSession::new(store),
            renderer: RowRenderer::new(settings.display.clone()),
            dispatcher: PopupDispatcher::new(&settings.popup),
            settings_engine,
            db,
        }
    }

    /// Builds the app around an explicit store, bypassing the configured backend.
    pub fn with_store(settings_engine: SettingsEngine, store: Box<dyn TimestampStore>) -> Self {
        let settings = settings_engine.get_settings().clone();
        Self {
            session: PopupSession::new(store),
            renderer: RowRenderer::new(settings.display.clone()),
            dispatcher: PopupDispatcher::new(&settings.popup),
            settings_engine,
            db: None,
        }
    }

    /// Picks the timestamp backend. A database that cannot be opened falls
    /// back to the in-memory store.
    fn open_store(storage: &StorageSettings) -> (Box<dyn TimestampStore>, Option<Arc<Database>>) {
        if storage.backend == StorageBackend::Memory {
            info!("using in-memory timestamp store");
            return (Box::new(MemoryTimestampStore::new()), None);
        }

        let path = storage
            .database_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| platform::get_data_dir().join("tabfinder.db"));

        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "could not create data directory");
            }
        }

        match Database::open(&path) {
            Ok(db) => {
                info!(path = %path.display(), "using sqlite timestamp store");
                let db = Arc::new(db);
                (Box::new(SqliteTimestampStore::new(db.clone())), Some(db))
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "falling back to in-memory timestamp store");
                (Box::new(MemoryTimestampStore::new()), None)
            }
        }
    }

    /// Rebuilds the renderer and dispatcher after a settings change.
    ///
    /// The storage backend is only read at startup.
    pub fn apply_settings(&mut self) {
        let settings = self.settings_engine.get_settings();
        self.renderer = RowRenderer::new(settings.display.clone());
        self.dispatcher = PopupDispatcher::new(&settings.popup);
    }
}

//! TabFinder database layer.
//!
//! Provides SQLite connection management and schema migrations for the
//! tab open-time store.
//!
//! # Usage
//!
//! ```no_run
//! use tabfinder::database::Database;
//!
//! let db = Database::open("tabfinder.db").expect("failed to open database");
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;

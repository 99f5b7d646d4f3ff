//! SQLite persistence.
//!
//! RULE: Only this module talks to the database. The engine sees a
//! plain key/value surface through `StateStore` and never executes
//! SQL directly.

use crate::error::TrackerResult;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

// Storage keys, kept verbatim from the original campaign files so an
// existing database (or imported localStorage dump) loads unchanged.
pub const KEY_CAMPAIGN_DAY: &str = "campaignDay";
pub const KEY_DAY_NOTES: &str = "dayNotes";
pub const KEY_DAY_EVENTS: &str = "dayEvents";
pub const KEY_QUESTS: &str = "quests";
pub const KEY_DONE_QUESTS: &str = "doneQuests";

/// The key/value surface the engine persists through.
pub trait StateStore: Send {
    fn get(&self, key: &str) -> TrackerResult<Option<String>>;
    fn put(&self, key: &str, value: &str) -> TrackerResult<()>;
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the state database at `path`. URI filenames
    /// are accepted, so tests can share one in-memory database across
    /// connections.
    pub fn open(path: &str) -> TrackerResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL mode only for real files (shared-memory and :memory: ignore it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests and as a fallback).
    pub fn in_memory() -> TrackerResult<Self> {
        let conn = Connection::open(":memory:")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> TrackerResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_state.sql"))?;
        Ok(())
    }

    /// Open and migrate `path`, falling back to a migrated in-memory
    /// database when the file cannot be used. The tracker keeps
    /// running either way; only durability is lost.
    pub fn open_or_memory(path: &str) -> TrackerResult<Self> {
        match Self::open(path).and_then(|store| store.migrate().map(|_| store)) {
            Ok(store) => Ok(store),
            Err(err) => {
                log::warn!(
                    "cannot use state database at '{path}': {err}; \
                     falling back to in-memory state"
                );
                let store = Self::in_memory()?;
                store.migrate()?;
                Ok(store)
            }
        }
    }
}

impl StateStore for SqliteStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM campaign_state WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> TrackerResult<()> {
        self.conn.execute(
            "INSERT INTO campaign_state (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                            updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

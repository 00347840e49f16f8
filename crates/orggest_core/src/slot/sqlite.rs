//! SQLite-backed slot.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections for slot storage.
//! - Keep the single-key payload layout inside this module.
//!
//! # Invariants
//! - The `slots` table exists before the constructor returns.
//! - The whole record list lives under one key; saves replace that row.

use super::{decode_payload, encode_payload, RecordSlot, SlotResult};
use crate::model::record::Record;
use log::{error, info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::Instant;

const SLOT_KEY: &str = "orggest_records";

const SLOT_SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS slots (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
);";

/// Slot storing the payload as one row of a `slots` key-value table.
pub struct SqliteSlot {
    conn: Connection,
}

impl SqliteSlot {
    /// Opens a SQLite database file and prepares the slot table.
    ///
    /// # Side effects
    /// - Emits `slot_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> SlotResult<Self> {
        let started_at = Instant::now();
        info!("event=slot_open module=slot status=start mode=file");

        let conn = match Connection::open(path) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=slot_open module=slot status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        let slot = Self::bootstrap(conn)?;
        info!(
            "event=slot_open module=slot status=ok mode=file duration_ms={}",
            started_at.elapsed().as_millis()
        );
        Ok(slot)
    }

    /// Opens an in-memory SQLite slot, mainly for tests.
    pub fn open_in_memory() -> SlotResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn)
    }

    fn bootstrap(conn: Connection) -> SlotResult<Self> {
        conn.execute_batch(SLOT_SCHEMA_SQL)?;
        Ok(Self { conn })
    }
}

impl RecordSlot for SqliteSlot {
    fn load(&self) -> Vec<Record> {
        let row: Result<Option<String>, rusqlite::Error> = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                params![SLOT_KEY],
                |row| row.get(0),
            )
            .optional();

        match row {
            Ok(Some(raw)) => decode_payload(&raw, "sqlite"),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=slot_load module=slot status=reset origin=sqlite error={err}");
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[Record]) -> SlotResult<()> {
        let payload = encode_payload(records)?;
        self.conn.execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![SLOT_KEY, payload],
        )?;
        Ok(())
    }
}

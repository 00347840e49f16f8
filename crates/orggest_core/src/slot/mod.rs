//! Durable slot abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the single key-value slot contract used by the record store.
//! - Isolate file/SQLite/in-memory persistence details from store logic.
//!
//! # Invariants
//! - `load` absorbs missing or malformed payloads and yields an empty list;
//!   read failures never surface to the store.
//! - `save` replaces the whole payload in one synchronous write.

use crate::model::record::Record;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod json_file;
pub mod memory;
pub mod sqlite;

pub use json_file::JsonFileSlot;
pub use memory::MemorySlot;
pub use sqlite::SqliteSlot;

pub type SlotResult<T> = Result<T, SlotError>;

/// Persistence error for slot write paths.
///
/// Read paths never produce this type; malformed or missing payloads are
/// absorbed inside `load` implementations.
#[derive(Debug)]
pub enum SlotError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
    Sqlite(rusqlite::Error),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "slot i/o failure: {err}"),
            Self::Serialize(err) => write!(f, "slot payload serialization failure: {err}"),
            Self::Sqlite(err) => write!(f, "slot database failure: {err}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SlotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SlotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Single durable key-value slot holding the full record list.
///
/// The store always hands a full-list snapshot to `save` and receives a
/// full-list snapshot from `load`; implementations never alias or mutate the
/// store's live list.
pub trait RecordSlot {
    /// Reads the slot content.
    ///
    /// Returns an empty list when the slot is absent or its payload is not a
    /// well-formed record list. Failures are logged, never raised.
    fn load(&self) -> Vec<Record>;

    /// Overwrites the slot with the given list in one synchronous write.
    fn save(&self, records: &[Record]) -> SlotResult<()>;
}

/// Decodes a serialized slot payload, absorbing malformed content.
///
/// Shared by slot implementations so that "corrupt payload resets to empty"
/// behaves identically regardless of the backing medium.
pub(crate) fn decode_payload(raw: &str, origin: &str) -> Vec<Record> {
    match serde_json::from_str::<Vec<Record>>(raw) {
        Ok(records) => records,
        Err(err) => {
            log::warn!(
                "event=slot_load module=slot status=reset origin={origin} error={err}"
            );
            Vec::new()
        }
    }
}

/// Encodes the full record list as the slot payload.
pub(crate) fn encode_payload(records: &[Record]) -> SlotResult<String> {
    Ok(serde_json::to_string(records)?)
}

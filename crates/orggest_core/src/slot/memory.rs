//! In-memory slot stub.
//!
//! # Responsibility
//! - Back the record store with a process-local payload for tests and
//!   ephemeral sessions.
//!
//! # Invariants
//! - Payload semantics match the durable slots: load of a corrupt payload
//!   resets to an empty list.

use super::{decode_payload, encode_payload, RecordSlot, SlotResult};
use crate::model::record::Record;
use std::cell::RefCell;

/// Slot holding its serialized payload in memory.
///
/// Stores the encoded document rather than the records themselves so the
/// serialization path is exercised exactly like the durable slots.
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: RefCell<Option<String>>,
}

impl MemorySlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-seeded with a raw payload.
    ///
    /// Used by tests that need to simulate corrupt or legacy content.
    pub fn with_payload(raw: impl Into<String>) -> Self {
        Self {
            payload: RefCell::new(Some(raw.into())),
        }
    }

    /// Returns the current raw payload, if any was ever saved or seeded.
    pub fn raw_payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }
}

impl RecordSlot for MemorySlot {
    fn load(&self) -> Vec<Record> {
        match self.payload.borrow().as_deref() {
            Some(raw) => decode_payload(raw, "memory"),
            None => Vec::new(),
        }
    }

    fn save(&self, records: &[Record]) -> SlotResult<()> {
        let payload = encode_payload(records)?;
        *self.payload.borrow_mut() = Some(payload);
        Ok(())
    }
}

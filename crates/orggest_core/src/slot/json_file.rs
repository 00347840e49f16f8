//! JSON file slot.
//!
//! # Responsibility
//! - Persist the record list as one JSON document at a fixed path.
//! - Keep partially written files invisible to readers.
//!
//! # Invariants
//! - A missing file loads as an empty list without logging noise.
//! - Writes land via temp-file rename, so readers see old or new content,
//!   never a torn document.

use super::{decode_payload, encode_payload, RecordSlot, SlotResult};
use crate::model::record::Record;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Slot backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    /// Creates a slot at the given path. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecordSlot for JsonFileSlot {
    fn load(&self) -> Vec<Record> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=slot_load module=slot status=reset origin=file path={} error={err}",
                    self.path.display()
                );
                return Vec::new();
            }
        };

        decode_payload(&raw, "file")
    }

    fn save(&self, records: &[Record]) -> SlotResult<()> {
        let payload = encode_payload(records)?;
        let temp = self.temp_path();
        fs::write(&temp, payload.as_bytes())?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

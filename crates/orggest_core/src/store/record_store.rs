//! Record store: CRUD, merge-import and export over the record list.
//!
//! # Responsibility
//! - Enforce identity and defaulting rules for every record entering the
//!   list.
//! - Delegate durability to a `RecordSlot` after each mutation.
//!
//! # Invariants
//! - `id` is unique across the list at all times.
//! - `created_at` is never rewritten after assignment.
//! - Unknown ids on update/delete are silent no-ops, not errors.

use crate::model::record::{
    generate_record_id, now_timestamp, NewRecord, Record, RecordId, RecordPatch, RecordSeed,
    RecordValidationError,
};
use crate::slot::{RecordSlot, SlotError};
use chrono::Utc;
use log::info;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Title given to imported records that carry none.
pub const DEFAULT_TITLE: &str = "Untitled";
/// Category given to imported records that carry none.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for record mutations and import/export.
#[derive(Debug)]
pub enum StoreError {
    Validation(RecordValidationError),
    Storage(SlotError),
    /// Import document's top level is not a list of records.
    ImportFormat(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::ImportFormat(message) => write!(f, "invalid import document: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::ImportFormat(_) => None,
        }
    }
}

impl From<RecordValidationError> for StoreError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<SlotError> for StoreError {
    fn from(value: SlotError) -> Self {
        Self::Storage(value)
    }
}

/// How an import interacts with the existing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// The list becomes exactly the normalized incoming records.
    Replace,
    /// Incoming records are appended; colliding ids are silently dropped.
    Merge,
}

/// Record store owning the in-memory list backed by a durable slot.
pub struct RecordStore<S: RecordSlot> {
    slot: S,
    records: Vec<Record>,
}

impl<S: RecordSlot> RecordStore<S> {
    /// Creates a store by loading the current snapshot from the slot.
    ///
    /// A missing or malformed slot payload starts the store empty; read
    /// failures are absorbed inside the slot.
    pub fn open(slot: S) -> Self {
        let records = slot.load();
        info!(
            "event=store_open module=store status=ok records={}",
            records.len()
        );
        Self { slot, records }
    }

    /// Creates a record from validated input.
    ///
    /// Assigns a fresh collision-free id and `created_at`, appends, persists
    /// and returns the stored record.
    pub fn create(&mut self, input: NewRecord) -> StoreResult<Record> {
        input.validate()?;

        let record = Record {
            id: self.fresh_id(),
            title: input.title,
            category: input.category,
            owner: input.owner,
            date: input.date,
            description: input.description,
            created_at: now_timestamp(),
            updated_at: None,
        };

        self.records.push(record.clone());
        self.persist()?;
        info!(
            "event=record_create module=store status=ok id={} category={}",
            record.id, record.category
        );
        Ok(record)
    }

    /// Merges non-`None` patch fields into the record with the given id.
    ///
    /// Returns `Ok(None)` without persisting when the id is unknown.
    /// Required fields are deliberately not re-validated here, so a patch may
    /// blank out title or category.
    pub fn update(&mut self, id: &str, patch: &RecordPatch) -> StoreResult<Option<Record>> {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            info!("event=record_update module=store status=not_found id={id}");
            return Ok(None);
        };

        let record = &mut self.records[index];
        record.apply_patch(patch);
        record.updated_at = Some(now_timestamp());
        let updated = record.clone();

        self.persist()?;
        info!("event=record_update module=store status=ok id={id}");
        Ok(Some(updated))
    }

    /// Removes the record with the given id, if present.
    ///
    /// Persists afterward either way and returns whether a record was
    /// removed.
    pub fn delete(&mut self, id: &str) -> StoreResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() < before;

        self.persist()?;
        info!(
            "event=record_delete module=store status={} id={id}",
            if removed { "ok" } else { "not_found" }
        );
        Ok(removed)
    }

    /// Imports records parsed from a JSON document.
    ///
    /// Fails with `ImportFormat` when the top level is not a list; otherwise
    /// delegates to [`import_merge`](Self::import_merge).
    pub fn import_json(&mut self, payload: &str, mode: ImportMode) -> StoreResult<usize> {
        let value: serde_json::Value = payload
            .parse()
            .map_err(|err: serde_json::Error| StoreError::ImportFormat(err.to_string()))?;

        let serde_json::Value::Array(items) = value else {
            return Err(StoreError::ImportFormat(
                "top-level content must be a list of records".to_string(),
            ));
        };

        let seeds = items
            .into_iter()
            .map(serde_json::from_value::<RecordSeed>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| StoreError::ImportFormat(err.to_string()))?;

        self.import_merge(seeds, mode)
    }

    /// Imports normalized records in replace or merge mode.
    ///
    /// Replace makes the list exactly the normalized input; merge appends
    /// only records whose id does not collide with an existing one. Returns
    /// the count of records actually set or added.
    pub fn import_merge(&mut self, seeds: Vec<RecordSeed>, mode: ImportMode) -> StoreResult<usize> {
        let count = match mode {
            ImportMode::Replace => {
                let mut incoming = Vec::with_capacity(seeds.len());
                let mut taken = HashSet::new();
                for seed in seeds {
                    let record = normalize_seed(seed, &taken);
                    taken.insert(record.id.clone());
                    incoming.push(record);
                }
                self.records = incoming;
                self.records.len()
            }
            ImportMode::Merge => {
                let mut taken: HashSet<String> =
                    self.records.iter().map(|r| r.id.clone()).collect();
                let mut added = 0;
                for seed in seeds {
                    if seed.id.as_deref().is_some_and(|id| taken.contains(id)) {
                        // Colliding imports are dropped, existing data wins.
                        continue;
                    }
                    let record = normalize_seed(seed, &taken);
                    taken.insert(record.id.clone());
                    self.records.push(record);
                    added += 1;
                }
                added
            }
        };

        self.persist()?;
        info!(
            "event=record_import module=store status=ok mode={mode:?} count={count} total={}",
            self.records.len()
        );
        Ok(count)
    }

    /// Empties the list and persists the empty state.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.records.clear();
        self.persist()?;
        info!("event=store_clear module=store status=ok");
        Ok(())
    }

    /// Returns the current list as a read-only snapshot view.
    pub fn list_all(&self) -> &[Record] {
        &self.records
    }

    /// Looks up one record by id.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Serializes the full list as a pretty JSON export document.
    pub fn export_json(&self) -> StoreResult<String> {
        serde_json::to_string_pretty(&self.records)
            .map_err(|err| StoreError::Storage(SlotError::Serialize(err)))
    }

    fn persist(&self) -> StoreResult<()> {
        self.slot.save(&self.records)?;
        Ok(())
    }

    fn fresh_id(&self) -> RecordId {
        loop {
            let id = generate_record_id();
            if !self.records.iter().any(|r| r.id == id) {
                return id;
            }
        }
    }
}

/// Suggested file name for an export document, dated with the current UTC
/// calendar day, e.g. `orggest_records_2026-08-29.json`.
pub fn export_file_name() -> String {
    format!("orggest_records_{}.json", Utc::now().format("%Y-%m-%d"))
}

/// Fills defaults for a partial imported record.
///
/// `taken` holds ids that a generated replacement must avoid; a caller that
/// accepts seeds with explicit ids decides collision policy itself.
fn normalize_seed(seed: RecordSeed, taken: &HashSet<String>) -> Record {
    let id = match seed.id {
        Some(id) if !id.is_empty() => id,
        _ => loop {
            let candidate = generate_record_id();
            if !taken.contains(candidate.as_str()) {
                break candidate;
            }
        },
    };

    Record {
        id,
        title: seed.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        category: seed
            .category
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        owner: seed.owner.unwrap_or_default(),
        date: seed.date.unwrap_or_default(),
        description: seed.description.unwrap_or_default(),
        created_at: seed.created_at.unwrap_or_else(now_timestamp),
        // Import normalization rebuilds only the base fields; an imported
        // record starts its update history fresh.
        updated_at: None,
    }
}

//! Core domain logic for the orggest record manager.
//! This crate is the single source of truth for record invariants.

pub mod logging;
pub mod model;
pub mod query;
pub mod slot;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{
    NewRecord, Record, RecordId, RecordPatch, RecordSeed, RecordValidationError,
};
pub use query::summary::{summarize, Summary};
pub use query::view::{view, SortKey, ViewQuery};
pub use slot::{JsonFileSlot, MemorySlot, RecordSlot, SlotError, SqliteSlot};
pub use store::record_store::{
    export_file_name, ImportMode, RecordStore, StoreError, StoreResult, DEFAULT_CATEGORY,
    DEFAULT_TITLE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `orggest_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use orggest_core::{MemorySlot, RecordStore};

fn main() {
    let store = RecordStore::open(MemorySlot::new());
    println!("orggest_core version={}", orggest_core::core_version());
    println!("orggest_core records={}", store.list_all().len());
}

//! Record store layer.
//!
//! # Responsibility
//! - Own the in-memory record list and all mutations over it.
//! - Keep slot persistence behind the `RecordSlot` contract.
//!
//! # Invariants
//! - Every mutating operation persists the full list before returning.
//! - Record ids stay unique across all operations, including merge-import.

pub mod record_store;

//! Per-category summary for the report view.

use crate::model::record::Record;
use std::collections::BTreeMap;

/// Aggregated counts over a record snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Total number of records in the snapshot.
    pub total: usize,
    /// Record count per category, ordered by category name.
    pub by_category: BTreeMap<String, usize>,
}

/// Counts records overall and per category.
///
/// Pure; category names are taken verbatim, so records that entered the
/// store with a blanked-out category group under the empty string.
pub fn summarize(records: &[Record]) -> Summary {
    let mut by_category = BTreeMap::new();
    for record in records {
        *by_category.entry(record.category.clone()).or_insert(0) += 1;
    }

    Summary {
        total: records.len(),
        by_category,
    }
}

//! Accepted-value tracking for unique fields
//!
//! Each unique field owns one set of accepted values, keyed by its
//! [`FieldId`]. Sets only grow; there is no removal.

use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::types::FieldId;

/// Store of previously accepted values, one set per unique field.
///
/// A [`RecordType`](crate::model::RecordType) owns the store for its fields,
/// so the state lives exactly as long as the field definitions do.
#[derive(Debug, Default)]
pub struct UniqueStore {
    accepted: Mutex<HashMap<FieldId, HashSet<String>>>,
}

impl UniqueStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` for `field` unless it was already accepted.
    ///
    /// Returns `false` when the value is a duplicate. Check and insert happen
    /// under one lock.
    pub fn record(&self, field: FieldId, value: &Value) -> bool {
        self.lock()
            .entry(field)
            .or_default()
            .insert(canonical_form(value))
    }

    /// Checks whether `value` has been accepted by `field`.
    pub fn contains(&self, field: FieldId, value: &Value) -> bool {
        self.lock()
            .get(&field)
            .is_some_and(|set| set.contains(&canonical_form(value)))
    }

    /// Number of values accepted by `field` so far.
    pub fn accepted_count(&self, field: FieldId) -> usize {
        self.lock().get(&field).map_or(0, HashSet::len)
    }

    // Append-only sets: a poisoned guard still holds consistent data.
    fn lock(&self) -> MutexGuard<'_, HashMap<FieldId, HashSet<String>>> {
        self.accepted.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Compact JSON rendering; `"1"` and `1` stay distinct.
fn canonical_form(value: &Value) -> String {
    value.to_string()
}

//! Authoritative in-memory collection for one record type.

use std::collections::HashSet;

use super::{Record, RecordId};

/// Holds the loaded collection in insertion order.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current collection and take ownership of a freshly loaded one.
    pub fn replace(&mut self, records: Vec<R>) {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                tracing::warn!("Duplicate {} id {} in loaded collection", R::KIND, record.id());
            }
        }
        self.records = records;
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Apply `mutation` to the record with `id`.
    ///
    /// Unknown ids are a no-op; returns whether a record was touched.
    pub fn apply(&mut self, id: RecordId, mutation: &R::Mutation) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.apply(mutation);
                true
            }
            None => {
                tracing::debug!("Ignoring {:?} for unknown {} {}", mutation, R::KIND, id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Report, ReportMutation};
    use crate::source::fixtures;

    fn set_resolved(store: &mut RecordStore<Report>, id: RecordId, resolved: bool) -> bool {
        store.apply(id, &ReportMutation::SetResolved(resolved))
    }

    fn loaded() -> RecordStore<Report> {
        let mut store = RecordStore::new();
        store.replace(fixtures::reports());
        store
    }

    #[test]
    fn test_set_resolution_flag() {
        let mut store = loaded();
        assert!(!store.get(1).unwrap().is_resolved);

        assert!(set_resolved(&mut store, 1, true));
        assert!(store.get(1).unwrap().is_resolved);

        assert!(set_resolved(&mut store, 1, false));
        assert!(!store.get(1).unwrap().is_resolved);
    }

    #[test]
    fn test_set_resolution_flag_is_idempotent() {
        let mut once = loaded();
        set_resolved(&mut once, 3, true);

        let mut twice = loaded();
        set_resolved(&mut twice, 3, true);
        set_resolved(&mut twice, 3, true);

        assert_eq!(once.records(), twice.records());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut store = loaded();
        let before = store.records().to_vec();

        assert!(!set_resolved(&mut store, 42, true));
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_replace_preserves_order() {
        let mut store = loaded();
        let ids: Vec<_> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let mut reversed = fixtures::reports();
        reversed.reverse();
        store.replace(reversed);
        let ids: Vec<_> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_empty_store() {
        let store: RecordStore<Report> = RecordStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.get(1).is_none());
    }
}

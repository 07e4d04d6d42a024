use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use std::collections::HashMap;

/// Entries keyed by ISO date, iterated in first-insertion order.
#[derive(Debug, Default, Clone)]
pub struct EntryStore {
    records: HashMap<String, Entry>,
    order: Vec<String>,
}

impl EntryStore {
    /// Insert or replace. A replaced date keeps its original position.
    pub fn insert(&mut self, entry: Entry) {
        let key = entry.iso_date.clone();
        if self.records.insert(key.clone(), entry).is_none() {
            self.order.push(key);
        }
    }

    pub fn get(&self, iso_date: &str) -> AppResult<&Entry> {
        self.records
            .get(iso_date)
            .ok_or_else(|| AppError::NoEntry(iso_date.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.order.iter().filter_map(|k| self.records.get(k))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

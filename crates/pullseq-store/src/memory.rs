use std::collections::{BTreeMap, HashMap};

use crate::RecordStore;

/// Canned in-memory tables. Records come back cloned, the way a remote
/// lookup would return an owned row.
#[derive(Debug, Clone)]
pub struct MemoryStore<V> {
    tables: HashMap<String, BTreeMap<u64, V>>,
}

impl<V> MemoryStore<V> {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    pub fn insert(&mut self, table: &str, key: u64, record: V) {
        self.tables
            .entry(table.to_owned())
            .or_default()
            .insert(key, record);
    }

    pub fn with(mut self, table: &str, key: u64, record: V) -> Self {
        self.insert(table, key, record);
        self
    }
}

impl<V> Default for MemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> RecordStore for MemoryStore<V> {
    type Record = V;

    fn get(&self, table: &str, key: u64) -> Option<V> {
        let record = self.tables.get(table).and_then(|t| t.get(&key));
        if record.is_none() {
            tracing::trace!(table, key, "record absent");
        }
        record.cloned()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get_returns_present_records() {
        let store = MemoryStore::new().with("customer", 1, "John");

        assert_eq!(store.get("customer", 1), Some("John"));
    }

    #[test]
    fn test_absent_key_and_absent_table_are_none() {
        let store = MemoryStore::new().with("customer", 1, "John");

        assert_eq!(store.get("customer", 2), None);
        assert_eq!(store.get("food", 1), None);
    }
}

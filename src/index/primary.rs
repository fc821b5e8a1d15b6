use std::collections::HashMap;
use crate::core::types::{DocId, Record};

/// Exact-match lookup from document id to its record
#[derive(Debug, Default)]
pub struct PrimaryKeyIndex {
    records: HashMap<DocId, Record>,
}

impl PrimaryKeyIndex {
    pub fn new() -> Self {
        PrimaryKeyIndex {
            records: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PrimaryKeyIndex {
            records: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or overwrite, handing back the replaced record
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.document_id.clone(), record)
    }

    pub fn get(&self, doc_id: &DocId) -> Option<&Record> {
        self.records.get(doc_id)
    }

    pub fn contains(&self, doc_id: &DocId) -> bool {
        self.records.contains_key(doc_id)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub mod core;
pub mod analysis;
pub mod index;
pub mod search;
pub mod ingest;
pub mod bench;

pub use crate::core::config::{Config, DuplicatePolicy};
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{DocId, Record};
pub use crate::search::engine::SearchEngine;

/*
┌──────────────────────────────── DOCDEX LAYOUT ────────────────────────────────┐
│                                                                               │
│  ingest::csv_loader ──► ingest::store::RecordStore                            │
│                               │                                               │
│                               ▼                                               │
│                      index::builder::IndexBuilder  (single pass)              │
│                        │                      │                               │
│                        ▼                      ▼                               │
│        index::primary::PrimaryKeyIndex   index::inverted::InvertedIndex       │
│          DocId -> Record                   Term -> PostingList(DocId..)       │
│                        │                      │                               │
│                        └──────────┬───────────┘                               │
│                                   ▼                                           │
│                      search::engine::SearchEngine                             │
│                        search_by_id / search_by_keyword                       │
│                                   │                                           │
│                                   ▼                                           │
│          bench::harness ─► bench::scaling ─► bench::report                    │
│                                                                               │
└───────────────────────────────────────────────────────────────────────────────┘
*/

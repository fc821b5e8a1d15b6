use tracing::info;
use crate::analysis::tokenizer::normalize_keyword;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::stats::IndexStats;
use crate::core::types::{DocId, Record};
use crate::index::builder::{BuiltIndices, IndexBuilder};
use crate::index::inverted::InvertedIndex;
use crate::index::primary::PrimaryKeyIndex;
use crate::ingest::store::RecordStore;

/// Exact-id and keyword lookups over an immutable record set.
///
/// Both indices are built once in the constructor and never change
/// afterwards, so a `SearchEngine` can be shared between threads behind
/// an `Arc` and every query is a pure read.
pub struct SearchEngine {
    primary: PrimaryKeyIndex,
    inverted: InvertedIndex,
    stats: IndexStats,
}

impl SearchEngine {
    /// Build an engine from a fully loaded record store
    pub fn new(store: RecordStore, config: &Config) -> Result<Self> {
        Self::from_records(store.into_records(), config)
    }

    pub fn from_records<I>(records: I, config: &Config) -> Result<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let builder = IndexBuilder::new(config.duplicate_policy);
        let BuiltIndices { primary, inverted, stats } = builder.build(records)?;

        info!(
            records = stats.records_ingested,
            unique_ids = stats.unique_ids,
            distinct_tokens = stats.distinct_tokens,
            "search engine ready"
        );

        Ok(SearchEngine { primary, inverted, stats })
    }

    /// Record with this id, or `None` if it was never ingested
    pub fn search_by_id(&self, document_id: &DocId) -> Option<&Record> {
        self.primary.get(document_id)
    }

    /// Records whose title or author contains `keyword` as a whole
    /// whitespace-delimited word, compared case-insensitively.
    ///
    /// Results are ordered by ascending document id. Unknown words, blank
    /// input and multi-word input all yield an empty vec.
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<&Record> {
        let Some(term) = normalize_keyword(keyword) else {
            return Vec::new();
        };

        match self.inverted.search_term(&term) {
            Some(postings) => postings
                .iter()
                .filter_map(|doc_id| self.primary.get(doc_id))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn contains_token(&self, keyword: &str) -> bool {
        normalize_keyword(keyword)
            .map(|term| self.inverted.search_term(&term).is_some())
            .unwrap_or(false)
    }

    /// Indexed records in no particular order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.primary.records()
    }

    /// Number of distinct document ids
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }
}

use tracing::{debug, warn};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::core::config::DuplicatePolicy;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::stats::IndexStats;
use crate::core::types::Record;
use crate::index::inverted::InvertedIndex;
use crate::index::primary::PrimaryKeyIndex;

/// Output of a build: both indices plus counters
pub struct BuiltIndices {
    pub primary: PrimaryKeyIndex,
    pub inverted: InvertedIndex,
    pub stats: IndexStats,
}

/// Builds the primary-key and inverted indices in one pass over the rows
pub struct IndexBuilder {
    tokenizer: Box<dyn Tokenizer>,
    pub duplicate_policy: DuplicatePolicy,
}

impl IndexBuilder {
    pub fn new(duplicate_policy: DuplicatePolicy) -> Self {
        IndexBuilder {
            tokenizer: Box::new(WhitespaceTokenizer::default()),
            duplicate_policy,
        }
    }

    /// Tokens of a record: title tokens followed by author tokens.
    /// Repeats are kept here; the posting lists drop them.
    pub fn record_tokens(&self, record: &Record) -> Vec<String> {
        let mut tokens = self.tokenizer.tokenize(&record.title);
        tokens.extend(self.tokenizer.tokenize(&record.author));
        tokens
    }

    pub fn build<I>(&self, records: I) -> Result<BuiltIndices>
    where
        I: IntoIterator<Item = Record>,
    {
        let records = records.into_iter();
        let mut primary = PrimaryKeyIndex::with_capacity(records.size_hint().0);
        let mut inverted = InvertedIndex::new();
        let mut stats = IndexStats::default();

        for record in records {
            stats.records_ingested += 1;

            if primary.contains(&record.document_id) {
                match self.duplicate_policy {
                    DuplicatePolicy::Reject => {
                        return Err(Error::new(
                            ErrorKind::DuplicateId,
                            format!(
                                "Document ID {} appears more than once (row {})",
                                record.document_id, stats.records_ingested
                            ),
                        ));
                    }
                    DuplicatePolicy::LastWriteWins => {
                        warn!(doc_id = %record.document_id, "duplicate document id, keeping later row");
                        stats.duplicate_ids += 1;
                    }
                }
            }

            let tokens = self.record_tokens(&record);
            inverted.add_document(&record.document_id, &tokens);
            primary.insert(record);
        }

        inverted.finalize();

        stats.unique_ids = primary.len();
        stats.distinct_tokens = inverted.term_count();
        stats.total_postings = inverted.total_postings();

        debug!(
            records = stats.records_ingested,
            unique_ids = stats.unique_ids,
            tokens = stats.distinct_tokens,
            tokenizer = self.tokenizer.name(),
            "indices built"
        );

        Ok(BuiltIndices { primary, inverted, stats })
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        IndexBuilder::new(DuplicatePolicy::default())
    }
}

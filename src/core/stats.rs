use serde::{Serialize, Deserialize};

/// Counters collected while building the indices
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub records_ingested: usize,
    pub unique_ids: usize,
    pub duplicate_ids: usize,     // Rows whose id was already indexed
    pub distinct_tokens: usize,
    pub total_postings: usize,    // Sum of posting list lengths
}


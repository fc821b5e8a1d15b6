use rand::Rng;
use rand::seq::SliceRandom;
use crate::analysis::tokenizer::split_words;
use crate::core::types::DocId;
use crate::ingest::store::RecordStore;

/// Inputs for one timing run: an id that exists and a word from its row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub document_id: DocId,
    pub keyword: String,
}

/// Pick a random row and a random word from its title.
///
/// Falls back to the author when the title is blank. The keyword keeps its
/// original casing; keyword search lowercases it anyway.
pub fn sample_probe<R: Rng + ?Sized>(store: &RecordStore, rng: &mut R) -> Option<Probe> {
    let record = store.records().choose(rng)?;

    let mut words: Vec<&str> = split_words(&record.title).collect();
    if words.is_empty() {
        words = split_words(&record.author).collect();
    }
    let keyword = words.choose(rng).map(|w| w.to_string()).unwrap_or_default();

    Some(Probe {
        document_id: record.document_id.clone(),
        keyword,
    })
}

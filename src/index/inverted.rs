use std::collections::HashMap;
use crate::core::types::DocId;
use crate::index::posting::PostingList;

/// Term representation (already lowercased)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term(String);

impl Term {
    pub fn new(text: &str) -> Self {
        Term(text.to_string())
    }
}

/// Inverted index structure: term -> ids of documents whose title or
/// author contains the term
#[derive(Debug, Default)]
pub struct InvertedIndex {
    pub postings: HashMap<Term, PostingList>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            postings: HashMap::new(),
        }
    }

    pub fn add_document(&mut self, doc_id: &DocId, tokens: &[String]) {
        for token in tokens {
            self.postings.entry(Term::new(token))
                .or_insert_with(PostingList::new)
                .push(doc_id.clone());
        }
    }

    /// Sort and dedup every posting list; call once after the last document
    pub fn finalize(&mut self) {
        for list in self.postings.values_mut() {
            list.finalize();
        }
    }

    pub fn search_term(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(&Term::new(term))
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn total_postings(&self) -> usize {
        self.postings.values().map(PostingList::len).sum()
    }
}

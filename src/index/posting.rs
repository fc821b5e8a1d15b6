use crate::core::types::DocId;

/// Documents containing a term
/// Note: ids are appended unordered while building; `finalize` sorts and
/// dedups them once, after which the list is ascending and duplicate-free
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    pub doc_ids: Vec<DocId>,
}

impl PostingList {
    pub fn new() -> Self {
        PostingList {
            doc_ids: Vec::new(),
        }
    }

    pub fn push(&mut self, doc_id: DocId) {
        // Same row repeating a word
        if self.doc_ids.last() != Some(&doc_id) {
            self.doc_ids.push(doc_id);
        }
    }

    pub fn finalize(&mut self) {
        self.doc_ids.sort_unstable();
        self.doc_ids.dedup();
        self.doc_ids.shrink_to_fit();
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocId> {
        self.doc_ids.iter()
    }

    pub fn len(&self) -> usize {
        self.doc_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_sorts_and_dedups() {
        let mut list = PostingList::new();
        list.push(DocId::Numeric(7));
        list.push(DocId::Numeric(7));
        list.push(DocId::Numeric(2));
        list.push(DocId::from("x-1"));
        list.push(DocId::Numeric(7));
        list.finalize();

        assert_eq!(list.doc_ids, vec![DocId::Numeric(2), DocId::Numeric(7), DocId::from("x-1")]);
    }

    #[test]
    fn numeric_ids_order_by_value() {
        let mut list = PostingList::new();
        list.push(DocId::Numeric(10));
        list.push(DocId::Numeric(9));
        list.finalize();
        assert_eq!(list.doc_ids, vec![DocId::Numeric(9), DocId::Numeric(10)]);
    }

    #[test]
    fn descending_input_ends_ascending() {
        let mut list = PostingList::new();
        for id in (0..1000u64).rev() {
            list.push(DocId::Numeric(id));
        }
        list.finalize();

        assert_eq!(list.len(), 1000);
        assert!(list.doc_ids.windows(2).all(|w| w[0] < w[1]));
    }
}

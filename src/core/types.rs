use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use std::fmt;

/// Document identifier as it appears in the source data.
///
/// Identifiers that parse as unsigned integers compare numerically, so
/// `2` orders before `10`. Any other identifier is kept as text and orders
/// after every numeric one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocId {
    Numeric(u64),
    Text(String),
}

impl DocId {
    /// Parse a raw cell. Surrounding whitespace is not part of the id.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<u64>() {
            Ok(n) => DocId::Numeric(n),
            Err(_) => DocId::Text(trimmed.to_string()),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, DocId::Text(s) if s.is_empty())
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId::Numeric(id)
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        DocId::parse(id)
    }
}

impl From<String> for DocId {
    fn from(id: String) -> Self {
        DocId::parse(&id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DocId::Numeric(n) => write!(f, "{}", n),
            DocId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One row of the document archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub document_id: DocId,
    pub title: String,
    pub author: String,
    /// Columns other than id/title/author, keyed by header
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Record {
    pub fn new(document_id: impl Into<DocId>, title: &str, author: &str) -> Self {
        Record {
            document_id: document_id.into(),
            title: title.to_string(),
            author: author.to_string(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.extra.insert(name.to_string(), value.to_string());
        self
    }

    pub fn get_field(&self, name: &str) -> Option<&str> {
        self.extra.get(name).map(String::as_str)
    }
}

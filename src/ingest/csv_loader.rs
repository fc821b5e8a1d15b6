use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DocId, Record};
use crate::ingest::store::RecordStore;

pub const ID_COLUMN: &str = "Document ID";
pub const TITLE_COLUMN: &str = "Document Title";
pub const AUTHOR_COLUMN: &str = "Author";

/// Column positions resolved from the header row
struct ColumnMap {
    id: usize,
    title: Option<usize>,
    author: Option<usize>,
    extra: Vec<(usize, String)>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let id = find(ID_COLUMN).ok_or_else(|| {
            Error::new(
                ErrorKind::MissingColumn,
                format!("Required column '{}' not found in header", ID_COLUMN),
            )
        })?;
        let title = find(TITLE_COLUMN);
        let author = find(AUTHOR_COLUMN);

        for (name, pos) in [(TITLE_COLUMN, title), (AUTHOR_COLUMN, author)] {
            if pos.is_none() {
                warn!(column = name, "column missing, treating every value as empty");
            }
        }

        let extra = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != id && Some(*i) != title && Some(*i) != author)
            .map(|(i, h)| (i, h.trim().to_string()))
            .collect();

        Ok(ColumnMap { id, title, author, extra })
    }

    fn cell<'a>(row: &'a csv::StringRecord, pos: Option<usize>) -> &'a str {
        pos.and_then(|p| row.get(p)).unwrap_or("")
    }

    fn to_record(&self, row: &csv::StringRecord, row_number: usize) -> Result<Record> {
        let document_id = DocId::parse(Self::cell(row, Some(self.id)));
        if document_id.is_blank() {
            return Err(Error::new(
                ErrorKind::Parse,
                format!("Row {}: empty '{}'", row_number, ID_COLUMN),
            ));
        }

        let extra: BTreeMap<String, String> = self.extra
            .iter()
            .map(|(pos, name)| (name.clone(), Self::cell(row, Some(*pos)).to_string()))
            .collect();

        Ok(Record {
            document_id,
            title: Self::cell(row, self.title).to_string(),
            author: Self::cell(row, self.author).to_string(),
            extra,
        })
    }
}

/// Load every row of a CSV file.
///
/// Either the whole file is ingested or an error is returned; a store is
/// never produced from a partial read.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<RecordStore> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::new(ErrorKind::Io, format!("{}: {}", path.display(), e)))?;

    let store = read_csv(file)?;
    info!(path = %path.display(), records = store.len(), "loaded document archive");
    Ok(store)
}

pub fn read_csv<R: Read>(reader: R) -> Result<RecordStore> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for (i, row) in csv_reader.records().enumerate() {
        let row_number = i + 1;
        let row = row.map_err(|e| {
            let mut err = Error::from(e);
            err.context = format!("Row {}: {}", row_number, err.context);
            err
        })?;
        records.push(columns.to_record(&row, row_number)?);
    }

    Ok(RecordStore::new(records))
}

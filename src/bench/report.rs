use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use crate::bench::scaling::SizeRun;
use crate::core::error::Result;

/// Results of one benchmark invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub dataset_size: usize,
    pub full: Option<SizeRun>,
    pub sweep: Vec<SizeRun>,
}

impl Report {
    pub fn new(dataset_size: usize, full: Option<SizeRun>, sweep: Vec<SizeRun>) -> Self {
        Report {
            generated_at: Utc::now(),
            dataset_size,
            full,
            sweep,
        }
    }

    /// Headline numbers for the full dataset
    pub fn render_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Dataset Size: {} records", self.dataset_size);
        match &self.full {
            Some(run) => {
                let _ = writeln!(out, "Exact ID Search Time (s): {:.6}", run.timing.id_search_secs);
                let _ = writeln!(out, "Keyword Search Time (s): {:.6}", run.timing.keyword_search_secs);
            }
            None => {
                let _ = writeln!(out, "No records to measure");
            }
        }
        out
    }

    /// One row per sweep size; the series a size-vs-latency chart would plot
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>10}  {:>12}  {:>16}  {:>16}  {}",
            "records", "unique ids", "id search (s)", "keyword (s)", "probe"
        );
        for run in &self.sweep {
            let _ = writeln!(
                out,
                "{:>10}  {:>12}  {:>16.9}  {:>16.9}  {} / {:?}",
                run.size,
                run.unique_ids,
                run.timing.id_search_secs,
                run.timing.keyword_search_secs,
                run.probe_id,
                run.probe_keyword,
            );
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

use std::hint::black_box;
use std::time::Instant;
use serde::{Serialize, Deserialize};
use tracing::debug;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocId;
use crate::search::engine::SearchEngine;

/// Mean wall-clock latency of each lookup, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub id_search_secs: f64,
    pub keyword_search_secs: f64,
    pub trials: usize,
}

/// Call each lookup `trials` times with the same arguments and average.
///
/// The engine keeps no per-query state, so every call does the same work.
pub fn measure_performance(
    engine: &SearchEngine,
    document_id: &DocId,
    keyword: &str,
    trials: usize,
) -> Result<Timing> {
    if trials == 0 {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            "trials must be at least 1".to_string(),
        ));
    }

    let start = Instant::now();
    for _ in 0..trials {
        black_box(engine.search_by_id(black_box(document_id)));
    }
    let id_search_secs = start.elapsed().as_secs_f64() / trials as f64;

    let start = Instant::now();
    for _ in 0..trials {
        black_box(engine.search_by_keyword(black_box(keyword)));
    }
    let keyword_search_secs = start.elapsed().as_secs_f64() / trials as f64;

    debug!(
        doc_id = %document_id,
        keyword,
        trials,
        id_search_secs,
        keyword_search_secs,
        "measured search latency"
    );

    Ok(Timing {
        id_search_secs,
        keyword_search_secs,
        trials,
    })
}

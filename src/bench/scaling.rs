use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};
use tracing::{info, warn};
use crate::bench::harness::{measure_performance, Timing};
use crate::bench::report::Report;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::types::DocId;
use crate::ingest::sample::sample_probe;
use crate::ingest::store::RecordStore;
use crate::search::engine::SearchEngine;

/// Timing for one engine built over `size` records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeRun {
    pub size: usize,
    pub unique_ids: usize,
    pub probe_id: DocId,
    pub probe_keyword: String,
    pub timing: Timing,
}

/// Build an engine over `store`, pick a probe and time both lookups.
/// Returns `None` when the store is empty.
pub fn measure_store<R: Rng + ?Sized>(
    store: RecordStore,
    config: &Config,
    rng: &mut R,
) -> Result<Option<SizeRun>> {
    let Some(probe) = sample_probe(&store, rng) else {
        return Ok(None);
    };

    let size = store.len();
    let engine = SearchEngine::new(store, config)?;
    let timing = measure_performance(&engine, &probe.document_id, &probe.keyword, config.trials)?;

    Ok(Some(SizeRun {
        size,
        unique_ids: engine.len(),
        probe_id: probe.document_id,
        probe_keyword: probe.keyword,
        timing,
    }))
}

/// Rebuild and time an engine over the first `n` records for each `n` in
/// `sizes`. Sizes the store cannot fill are skipped.
pub fn run_size_sweep<R: Rng + ?Sized>(
    store: &RecordStore,
    sizes: &[usize],
    config: &Config,
    rng: &mut R,
) -> Result<Vec<SizeRun>> {
    let mut runs = Vec::with_capacity(sizes.len());

    for &size in sizes {
        if size == 0 || size > store.len() {
            warn!(size, available = store.len(), "skipping dataset size");
            continue;
        }

        if let Some(run) = measure_store(store.truncated(size), config, rng)? {
            runs.push(run);
        }
    }

    Ok(runs)
}

/// Time the full store, then sweep `config.sizes`
pub fn run_benchmark(store: &RecordStore, config: &Config) -> Result<Report> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let full = measure_store(store.clone(), config, &mut rng)?;
    let sweep = run_size_sweep(store, &config.sizes, config, &mut rng)?;

    info!(dataset_size = store.len(), sweep_runs = sweep.len(), "benchmark complete");

    Ok(Report::new(store.len(), full, sweep))
}

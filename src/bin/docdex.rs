//! docdex - load a document archive CSV and time exact-id and keyword
//! lookups, first over the whole file and then over growing prefixes of it.
//!
//! Usage:
//!   docdex archive.csv [--trials 10] [--sizes 100,1000,10000] [--seed 7]
//!                      [--reject-duplicates] [--json report.json]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use docdex::bench::scaling::run_benchmark;
use docdex::ingest::csv_loader::load_csv;
use docdex::{Config, DuplicatePolicy};

#[derive(Parser)]
#[command(name = "docdex")]
#[command(about = "In-memory document search index benchmark", long_about = None)]
struct Args {
    /// CSV file with `Document ID`, `Document Title` and `Author` columns
    csv: PathBuf,

    /// Calls per lookup when averaging latency
    #[arg(long, default_value = "10")]
    trials: usize,

    /// Comma-separated dataset sizes for the scaling sweep
    #[arg(long, value_delimiter = ',', default_value = "100,1000,10000")]
    sizes: Vec<usize>,

    /// Seed for picking probe records
    #[arg(long)]
    seed: Option<u64>,

    /// Fail instead of keeping the last row when an id repeats
    #[arg(long)]
    reject_duplicates: bool,

    /// Also write the report as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docdex=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = Config {
        duplicate_policy: if args.reject_duplicates {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::LastWriteWins
        },
        trials: args.trials,
        sizes: args.sizes,
        seed: args.seed,
    };

    let store = load_csv(&args.csv)
        .with_context(|| format!("failed to load {}", args.csv.display()))?;

    let report = run_benchmark(&store, &config)?;

    print!("{}", report.render_summary());
    println!();
    print!("{}", report.render_table());

    if let Some(path) = &args.json {
        report.write_json(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote JSON report");
    }

    Ok(())
}

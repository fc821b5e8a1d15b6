use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use docdex::{Config, DocId, Record, SearchEngine};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

const WORDS: [&str; 8] = ["apollo", "mission", "report", "archive", "lunar", "survey", "orbital", "notes"];
const AUTHORS: [&str; 4] = ["Jane Doe", "John Roe", "Ada Lovelace", "Grace Hopper"];

/// Helper to create a synthetic archive
fn create_records(count: u64) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|id| {
            let title: String = (0..5)
                .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
                .collect::<Vec<_>>()
                .join(" ");
            let author = AUTHORS[rng.gen_range(0..AUTHORS.len())];
            Record::new(id, &format!("{} volume {}", title, id), author)
        })
        .collect()
}

/// Benchmark index construction
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100u64, 1000, 10000].iter() {
        let records = create_records(*size);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &records,
            |b, records| {
                b.iter(|| {
                    SearchEngine::from_records(records.clone(), &Config::default()).unwrap()
                });
            },
        );
    }
    group.finish();
}

/// Benchmark both lookups across dataset sizes
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100u64, 1000, 10000].iter() {
        let engine = SearchEngine::from_records(create_records(*size), &Config::default()).unwrap();
        let probe_id = DocId::from(size / 2);

        group.bench_with_input(
            BenchmarkId::new("by_id", size),
            &probe_id,
            |b, id| {
                b.iter(|| {
                    black_box(engine.search_by_id(black_box(id)));
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("by_keyword", size),
            &"Apollo",
            |b, keyword| {
                b.iter(|| {
                    black_box(engine.search_by_keyword(black_box(keyword)));
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("by_keyword_miss", size),
            &"nonexistent",
            |b, keyword| {
                b.iter(|| {
                    black_box(engine.search_by_keyword(black_box(keyword)));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);

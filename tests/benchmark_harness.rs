use rand::SeedableRng;
use rand::rngs::StdRng;

use docdex::bench::harness::measure_performance;
use docdex::bench::report::Report;
use docdex::bench::scaling::{run_benchmark, run_size_sweep};
use docdex::ingest::sample::sample_probe;
use docdex::ingest::store::RecordStore;
use docdex::{Config, DocId, ErrorKind, Record, SearchEngine};

fn create_store(count: u64) -> RecordStore {
    (0..count)
        .map(|i| Record::new(i, &format!("Archive Volume {}", i), "Jane Doe"))
        .collect()
}

#[test]
fn timing_is_averaged_over_trials() {
    let engine = SearchEngine::new(create_store(50), &Config::default()).unwrap();

    let timing = measure_performance(&engine, &DocId::from(7u64), "archive", 25).unwrap();
    assert_eq!(timing.trials, 25);
    assert!(timing.id_search_secs >= 0.0);
    assert!(timing.keyword_search_secs >= 0.0);
}

#[test]
fn measuring_does_not_change_results() {
    let engine = SearchEngine::new(create_store(20), &Config::default()).unwrap();
    let before = engine.search_by_keyword("volume").len();

    measure_performance(&engine, &DocId::from(3u64), "volume", 100).unwrap();

    assert_eq!(engine.search_by_keyword("volume").len(), before);
    assert_eq!(before, 20);
}

#[test]
fn zero_trials_is_rejected() {
    let engine = SearchEngine::new(create_store(5), &Config::default()).unwrap();
    let err = measure_performance(&engine, &DocId::from(1u64), "archive", 0).err().unwrap();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn probe_comes_from_an_existing_record() {
    let store = create_store(30);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let probe = sample_probe(&store, &mut rng).unwrap();
        let record = store
            .records()
            .iter()
            .find(|r| r.document_id == probe.document_id)
            .unwrap();
        assert!(record.title.split_whitespace().any(|w| w == probe.keyword));
    }
}

#[test]
fn probe_falls_back_to_author_words() {
    let store = RecordStore::from(vec![Record::new(1u64, "  ", "Grace Hopper")]);
    let mut rng = StdRng::seed_from_u64(1);

    let probe = sample_probe(&store, &mut rng).unwrap();
    assert!(probe.keyword == "Grace" || probe.keyword == "Hopper");
}

#[test]
fn empty_store_has_no_probe() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(sample_probe(&RecordStore::default(), &mut rng).is_none());
}

#[test]
fn sweep_skips_sizes_larger_than_the_store() {
    let store = create_store(150);
    let mut rng = StdRng::seed_from_u64(3);
    let config = Config::default().with_trials(3);

    let runs = run_size_sweep(&store, &[10, 100, 1000, 0], &config, &mut rng).unwrap();

    let sizes: Vec<usize> = runs.iter().map(|r| r.size).collect();
    assert_eq!(sizes, vec![10, 100]);
    assert_eq!(runs[0].unique_ids, 10);
    assert!(runs.iter().all(|r| r.timing.trials == 3));
}

#[test]
fn seeded_benchmark_reuses_the_same_probes() {
    let store = create_store(200);
    let config = Config {
        sizes: vec![50, 200],
        seed: Some(11),
        ..Config::default()
    };

    let first = run_benchmark(&store, &config).unwrap();
    let second = run_benchmark(&store, &config).unwrap();

    let probes = |report: &Report| -> Vec<(DocId, String)> {
        report.sweep.iter().map(|r| (r.probe_id.clone(), r.probe_keyword.clone())).collect()
    };
    assert_eq!(probes(&first), probes(&second));
    assert_eq!(first.dataset_size, 200);
    assert_eq!(first.full.as_ref().map(|r| r.size), Some(200));
}

#[test]
fn report_renders_and_serializes() {
    let store = create_store(120);
    let config = Config {
        sizes: vec![100],
        seed: Some(5),
        ..Config::default()
    };
    let report = run_benchmark(&store, &config).unwrap();

    let summary = report.render_summary();
    assert!(summary.contains("Dataset Size: 120 records"));
    assert!(summary.contains("Exact ID Search Time (s):"));
    assert_eq!(report.render_table().lines().count(), 2);

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["dataset_size"], 120);
    assert_eq!(json["sweep"][0]["size"], 100);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    report.write_json(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn empty_store_reports_nothing_to_measure() {
    let report = run_benchmark(&RecordStore::default(), &Config::default()).unwrap();

    assert!(report.full.is_none());
    assert!(report.sweep.is_empty());
    assert!(report.render_summary().contains("No records to measure"));
}

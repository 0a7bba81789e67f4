// Benchmark driver tests
// Data generation, timed insert loops and the end-to-end run.

use batchbench::bench::{
    BenchReport, InsertMode, chunked_batch_insert, generate_data, run, shuffle_pairs,
    single_batch_insert,
};
use batchbench::config::{BenchConfig, BenchMode, EngineChoice};
use batchbench::logging::init_test_tracing;
use batchbench::{Error, LevelDb, Store, StoreOptions, WriteOptions};

fn mem_store(name: &str) -> Store<LevelDb> {
    Store::open_with(name, &StoreOptions::in_memory()).unwrap()
}

fn assert_all_present(store: &Store<LevelDb>, keys: &[Vec<u8>], values: &[Vec<u8>]) {
    for (key, value) in keys.iter().zip(values) {
        assert_eq!(store.get(key).unwrap().as_ref(), Some(value));
    }
}

// =============================================================================
// Test 1: Generated data follows the key_i / value_i pattern
// =============================================================================
#[test]
fn generate_data_pattern() {
    let (keys, values) = generate_data(3);
    assert_eq!(keys, vec![b"key_0".to_vec(), b"key_1".to_vec(), b"key_2".to_vec()]);
    assert_eq!(
        values,
        vec![b"value_0".to_vec(), b"value_1".to_vec(), b"value_2".to_vec()]
    );

    let (keys, values) = generate_data(0);
    assert!(keys.is_empty() && values.is_empty());
}

// =============================================================================
// Test 2: Shuffle is deterministic and keeps pairs together
// =============================================================================
#[test]
fn shuffle_keeps_pairs_and_is_deterministic() {
    let (keys, values) = generate_data(200);
    let (k1, v1) = shuffle_pairs(keys.clone(), values.clone(), 42);
    let (k2, v2) = shuffle_pairs(keys.clone(), values.clone(), 42);

    assert_eq!(k1, k2);
    assert_eq!(v1, v2);
    assert_ne!(k1, keys, "200 elements should not shuffle to identity");

    for (key, value) in k1.iter().zip(&v1) {
        let idx = &key[b"key_".len()..];
        assert_eq!(&value[b"value_".len()..], idx);
    }

    let mut sorted = k1.clone();
    sorted.sort();
    let mut expected = keys;
    expected.sort();
    assert_eq!(sorted, expected);
}

// =============================================================================
// Test 3: Single giant batch inserts everything
// =============================================================================
#[test]
fn single_batch_insert_writes_all_pairs() {
    let store = mem_store("single");
    let (keys, values) = generate_data(500);

    single_batch_insert(&store, &keys, &values, WriteOptions::default()).unwrap();

    assert_all_present(&store, &keys, &values);
}

// =============================================================================
// Test 4: Chunked insert handles a trailing partial chunk
// =============================================================================
#[test]
fn chunked_batch_insert_writes_all_pairs() {
    for batch_size in [1, 7, 100, 1000] {
        let store = mem_store(&format!("chunked_{}", batch_size));
        let (keys, values) = generate_data(250);

        chunked_batch_insert(&store, &keys, &values, batch_size, WriteOptions::default())
            .unwrap();

        assert_all_present(&store, &keys, &values);
    }
}

// =============================================================================
// Test 5: Bad parameters are rejected before anything is written
// =============================================================================
#[test]
fn invalid_parameters_rejected() {
    let store = mem_store("invalid");
    let (keys, values) = generate_data(10);

    let zero = chunked_batch_insert(&store, &keys, &values, 0, WriteOptions::default());
    assert!(matches!(zero, Err(Error::InvalidArgument(_))));

    let mismatched = single_batch_insert(&store, &keys, &values[..5], WriteOptions::default());
    assert!(matches!(mismatched, Err(Error::InvalidArgument(_))));

    assert!(!store.has(b"key_0").unwrap());
}

// =============================================================================
// Test 6: End-to-end run produces one report per mode
// =============================================================================
#[test]
fn run_reports_each_mode() {
    init_test_tracing();
    let dir = tempfile::tempdir().unwrap();
    let config = BenchConfig {
        records: 1000,
        batch_size: 128,
        mode: BenchMode::Both,
        engine: EngineChoice::Leveldb,
        leveldb_path: dir.path().join("leveldb"),
        shuffle_seed: Some(7),
        ..BenchConfig::default()
    };

    let reports: Vec<BenchReport> = run(&config).unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].mode, InsertMode::Single);
    assert_eq!(reports[1].mode, InsertMode::Chunked { batch_size: 128 });
    for report in &reports {
        assert_eq!(report.engine, "leveldb");
        assert_eq!(report.records, 1000);
    }

    // The store is closed after the run and holds every record
    let store = Store::<LevelDb>::open(&config.leveldb_path).unwrap();
    let (keys, values) = generate_data(1000);
    assert_all_present(&store, &keys, &values);
}

// =============================================================================
// Test 7: Invalid configuration fails the run
// =============================================================================
#[test]
fn run_rejects_zero_batch_size() {
    let config = BenchConfig {
        records: 10,
        batch_size: 0,
        engine: EngineChoice::Leveldb,
        ..BenchConfig::default()
    };
    assert!(matches!(run(&config), Err(Error::InvalidArgument(_))));
}

// =============================================================================
// Test 8: Requesting rocksdb without the feature is an error
// =============================================================================
#[cfg(not(feature = "rocksdb"))]
#[test]
fn rocksdb_without_feature_is_rejected() {
    let config = BenchConfig {
        records: 10,
        engine: EngineChoice::Rocksdb,
        ..BenchConfig::default()
    };
    assert!(matches!(run(&config), Err(Error::InvalidArgument(_))));
}

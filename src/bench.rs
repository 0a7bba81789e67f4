//! Benchmark driver: synthetic data, timed insert loops, reports.
//!
//! Two granularities are timed per engine:
//! - single: every record in one batch, one commit
//! - chunked: commit and reset every `batch_size` records

use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::info;

use crate::config::{BenchConfig, EngineKind};
use crate::engine::{Engine, LevelDb};
use crate::error::{Error, Result};
use crate::options::WriteOptions;
use crate::store::Store;

/// Keys `key_{i}` and values `value_{i}` for `i in 0..n`.
pub fn generate_data(n: usize) -> (Vec<Vec<u8>>, Vec<Vec<u8>>) {
    let keys = (0..n).map(|i| format!("key_{}", i).into_bytes()).collect();
    let values = (0..n).map(|i| format!("value_{}", i).into_bytes()).collect();
    (keys, values)
}

/// Shuffle insertion order, keeping each key paired with its value.
pub fn shuffle_pairs(
    keys: Vec<Vec<u8>>,
    values: Vec<Vec<u8>>,
    seed: u64,
) -> (Vec<Vec<u8>>, Vec<Vec<u8>>) {
    let mut pairs: Vec<_> = keys.into_iter().zip(values).collect();
    pairs.shuffle(&mut StdRng::seed_from_u64(seed));
    pairs.into_iter().unzip()
}

fn check_pairs(keys: &[Vec<u8>], values: &[Vec<u8>]) -> Result<()> {
    if keys.len() != values.len() {
        return Err(Error::InvalidArgument(format!(
            "{} keys but {} values",
            keys.len(),
            values.len()
        )));
    }
    Ok(())
}

/// Put every pair into one batch and commit it once.
pub fn single_batch_insert<E: Engine>(
    store: &Store<E>,
    keys: &[Vec<u8>],
    values: &[Vec<u8>],
    options: WriteOptions,
) -> Result<Duration> {
    check_pairs(keys, values)?;
    let start = Instant::now();

    let mut batch = store.batch_with(options);
    for (key, value) in keys.iter().zip(values) {
        batch.put(key, value)?;
    }
    batch.write()?;

    Ok(start.elapsed())
}

/// Commit and reset every `batch_size` pairs; a trailing partial batch is
/// committed too.
pub fn chunked_batch_insert<E: Engine>(
    store: &Store<E>,
    keys: &[Vec<u8>],
    values: &[Vec<u8>],
    batch_size: usize,
    options: WriteOptions,
) -> Result<Duration> {
    check_pairs(keys, values)?;
    if batch_size == 0 {
        return Err(Error::InvalidArgument("batch size must be positive".into()));
    }
    let start = Instant::now();

    let mut batch = store.batch_with(options);
    for (key, value) in keys.iter().zip(values) {
        batch.put(key, value)?;
        if batch.len() >= batch_size {
            batch.write()?;
            batch.reset();
        }
    }
    if !batch.is_empty() {
        batch.write()?;
        batch.reset();
    }

    Ok(start.elapsed())
}

/// How the records were committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertMode {
    Single,
    Chunked { batch_size: usize },
}

/// Outcome of one timed insert loop.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    pub engine: &'static str,
    pub mode: InsertMode,
    pub records: usize,
    pub elapsed: Duration,
}

impl BenchReport {
    /// Records per second; zero when nothing measurable elapsed.
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.records as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            InsertMode::Single => write!(
                f,
                "{} batch insert of {} key-value pairs took {:?}",
                self.engine, self.records, self.elapsed
            ),
            InsertMode::Chunked { batch_size } => write!(
                f,
                "{} batch insert with batch size of {} for {} key-value pairs took {:?}",
                self.engine, batch_size, self.records, self.elapsed
            ),
        }
    }
}

/// Open the store for `E` at `path`, run the configured loops, close it.
///
/// The store is released on every path: explicitly on success, by drop
/// when a loop fails.
pub fn run_engine<E: Engine>(
    path: &Path,
    config: &BenchConfig,
    keys: &[Vec<u8>],
    values: &[Vec<u8>],
) -> Result<Vec<BenchReport>> {
    let options = WriteOptions {
        sync: config.sync,
        ..WriteOptions::default()
    };
    let mut store = Store::<E>::open(path)?;
    let mut reports = Vec::new();

    if config.mode.includes_single() {
        let elapsed = single_batch_insert(&store, keys, values, options)?;
        reports.push(BenchReport {
            engine: E::NAME,
            mode: InsertMode::Single,
            records: keys.len(),
            elapsed,
        });
    }

    if config.mode.includes_chunked() {
        let elapsed = chunked_batch_insert(&store, keys, values, config.batch_size, options)?;
        reports.push(BenchReport {
            engine: E::NAME,
            mode: InsertMode::Chunked {
                batch_size: config.batch_size,
            },
            records: keys.len(),
            elapsed,
        });
    }

    for report in &reports {
        info!(
            engine = report.engine,
            mode = ?report.mode,
            records = report.records,
            elapsed_ms = report.elapsed.as_millis() as u64,
            throughput = report.throughput() as u64,
            "batch insert finished"
        );
    }

    store.close()?;
    Ok(reports)
}

/// Run the whole benchmark described by `config`.
pub fn run(config: &BenchConfig) -> Result<Vec<BenchReport>> {
    config.validate()?;
    let engines = config.engine.resolve()?;

    info!(records = config.records, "generating data");
    let (keys, values) = generate_data(config.records);
    let (keys, values) = match config.shuffle_seed {
        Some(seed) => shuffle_pairs(keys, values, seed),
        None => (keys, values),
    };

    let mut reports = Vec::new();
    for engine in engines {
        let engine_reports = match engine {
            EngineKind::LevelDb => {
                run_engine::<LevelDb>(&config.leveldb_path, config, &keys, &values)?
            }
            #[cfg(feature = "rocksdb")]
            EngineKind::RocksDb => run_engine::<crate::engine::RocksDb>(
                &config.rocksdb_path,
                config,
                &keys,
                &values,
            )?,
            #[cfg(not(feature = "rocksdb"))]
            EngineKind::RocksDb => {
                return Err(Error::InvalidArgument(
                    "rocksdb support not compiled in".into(),
                ));
            }
        };
        reports.extend(engine_reports);
    }

    Ok(reports)
}

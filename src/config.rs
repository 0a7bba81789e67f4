//! Benchmark configuration.
//!
//! Every flag can also be set through an environment variable. Defaults
//! reproduce the reference run: 50M records committed in batches of 200k.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::{Error, Result};

/// Which insert loops to time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BenchMode {
    /// Every record in one giant batch.
    Single,
    /// Commit and reset every `batch_size` records.
    Chunked,
    /// Single, then chunked.
    Both,
}

impl BenchMode {
    pub fn includes_single(self) -> bool {
        matches!(self, BenchMode::Single | BenchMode::Both)
    }

    pub fn includes_chunked(self) -> bool {
        matches!(self, BenchMode::Chunked | BenchMode::Both)
    }
}

/// Engine selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineChoice {
    Leveldb,
    Rocksdb,
    /// Every engine compiled into this binary.
    All,
}

/// A concrete engine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    LevelDb,
    RocksDb,
}

impl EngineChoice {
    /// Resolve to the engines to run, rejecting ones not compiled in.
    pub fn resolve(self) -> Result<Vec<EngineKind>> {
        match self {
            EngineChoice::Leveldb => Ok(vec![EngineKind::LevelDb]),
            EngineChoice::Rocksdb if cfg!(feature = "rocksdb") => Ok(vec![EngineKind::RocksDb]),
            EngineChoice::Rocksdb => Err(Error::InvalidArgument(
                "rocksdb support not compiled in (build with --features rocksdb)".into(),
            )),
            EngineChoice::All => {
                let mut engines = vec![EngineKind::LevelDb];
                if cfg!(feature = "rocksdb") {
                    engines.push(EngineKind::RocksDb);
                }
                Ok(engines)
            }
        }
    }
}

/// Batched write throughput benchmark for embedded LSM key-value stores.
#[derive(Parser, Debug, Clone)]
#[command(name = "batchbench")]
#[command(author, version, about, long_about = None)]
pub struct BenchConfig {
    /// Number of key/value pairs to insert
    #[arg(short = 'n', long, env = "BATCHBENCH_RECORDS", default_value_t = 50_000_000)]
    pub records: usize,

    /// Records per commit in chunked mode
    #[arg(short, long, env = "BATCHBENCH_BATCH_SIZE", default_value_t = 200_000)]
    pub batch_size: usize,

    /// Insert loops to time
    #[arg(long, env = "BATCHBENCH_MODE", value_enum, default_value_t = BenchMode::Chunked)]
    pub mode: BenchMode,

    /// Engines to benchmark
    #[arg(long, env = "BATCHBENCH_ENGINE", value_enum, default_value_t = EngineChoice::All)]
    pub engine: EngineChoice,

    /// Database directory for the LevelDB run
    #[arg(long, env = "BATCHBENCH_LEVELDB_PATH", default_value = "leveldb_test")]
    pub leveldb_path: PathBuf,

    /// Database directory for the RocksDB run
    #[arg(long, env = "BATCHBENCH_ROCKSDB_PATH", default_value = "test.db")]
    pub rocksdb_path: PathBuf,

    /// fsync every batch commit
    #[arg(long, env = "BATCHBENCH_SYNC")]
    pub sync: bool,

    /// Shuffle insertion order with this seed
    #[arg(long, env = "BATCHBENCH_SHUFFLE_SEED")]
    pub shuffle_seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "BATCHBENCH_LOG_JSON")]
    pub log_json: bool,
}

impl BenchConfig {
    /// Parse configuration from CLI arguments and environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Reject parameters the driver cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::InvalidArgument("batch size must be positive".into()));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            records: 50_000_000,
            batch_size: 200_000,
            mode: BenchMode::Chunked,
            engine: EngineChoice::All,
            leveldb_path: PathBuf::from("leveldb_test"),
            rocksdb_path: PathBuf::from("test.db"),
            sync: false,
            shuffle_seed: None,
            log_level: "info".into(),
            log_json: false,
        }
    }
}

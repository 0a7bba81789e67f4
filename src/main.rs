//! batchbench: time batched inserts into embedded LSM stores.
//!
//! # Usage
//!
//! ```bash
//! batchbench --records 1000000 --batch-size 200000 --mode both
//! ```
//!
//! Environment variables can also be used:
//! - `BATCHBENCH_RECORDS`, `BATCHBENCH_BATCH_SIZE`, `BATCHBENCH_MODE`
//! - `BATCHBENCH_ENGINE`, `BATCHBENCH_LEVELDB_PATH`, `BATCHBENCH_ROCKSDB_PATH`
//! - `RUST_LOG`: Log level (trace, debug, info, warn, error)

use anyhow::Context;
use batchbench::bench;
use batchbench::config::BenchConfig;
use batchbench::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let config = BenchConfig::parse_args();
    init_tracing(&config.log_level, config.log_json);

    // Any failure aborts the whole run.
    let reports = bench::run(&config).context("benchmark aborted")?;
    for report in &reports {
        println!("{report}");
    }

    Ok(())
}

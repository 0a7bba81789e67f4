//! # batchbench
//!
//! Batched write throughput benchmark for embedded LSM key-value stores.
//!
//! ## Core idea
//! The engines under test (rusty-leveldb, and RocksDB behind the `rocksdb`
//! feature) own the LSM tree, compaction and WAL. This crate wraps them in
//! a common store handle and a batch writer that buffers puts and deletes
//! in a replayable operation log, then commits the whole log atomically
//! through the engine's native write batch.
//!
//! ```no_run
//! use batchbench::{LevelDb, Store};
//!
//! # fn main() -> batchbench::Result<()> {
//! let store = Store::<LevelDb>::open("bench_db")?;
//! let mut batch = store.batch();
//! batch.put(b"key_0", b"value_0")?;
//! batch.delete(b"key_1")?;
//! batch.write()?;
//! batch.reset();
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod bench;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod options;
pub mod replay;
pub mod store;
pub mod types;

// Public re-exports for the top-level API
pub use batch::{BatchWriter, OperationLog};
pub use engine::{Engine, LevelDb};
#[cfg(feature = "rocksdb")]
pub use engine::RocksDb;
pub use error::{Error, Result};
pub use options::{StoreOptions, WriteOptions};
pub use replay::{KeyValueWriter, RecordingSink};
pub use store::Store;
pub use types::BatchOp;

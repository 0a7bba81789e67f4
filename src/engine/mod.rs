pub mod leveldb;
#[cfg(feature = "rocksdb")]
pub mod rocksdb;

use std::path::Path;

use crate::error::Result;
use crate::options::{StoreOptions, WriteOptions};
use crate::types::BatchOp;

pub use self::leveldb::LevelDb;
#[cfg(feature = "rocksdb")]
pub use self::rocksdb::RocksDb;

/// The seam between the batch layer and a wrapped embedded key-value store.
///
/// Every backend exposes the same narrow surface: point reads and writes,
/// plus an atomic commit of an ordered list of operations through the
/// engine's own write-batch type. The LSM tree, compaction and WAL all live
/// inside the wrapped engine.
///
/// Methods take `&self`. Backends whose native handle needs `&mut` use
/// interior mutability, which keeps them `!Sync`: one thread per store.
pub trait Engine: Sized {
    /// Short engine name used in logs and benchmark reports.
    const NAME: &'static str;

    /// Open (or create, per `options`) the database at `path`.
    ///
    /// Failures map to `Error::Open` with the engine's message.
    fn open(path: &Path, options: &StoreOptions) -> Result<Self>;

    /// Point read. `Ok(None)` when the key is absent.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Single-key write.
    fn put(&self, key: &[u8], value: &[u8], options: &WriteOptions) -> Result<()>;

    /// Single-key delete.
    fn delete(&self, key: &[u8], options: &WriteOptions) -> Result<()>;

    /// Build a native write batch from `ops`, in order, and commit it in one
    /// engine call. Either the whole batch is accepted or `Error::Commit` is
    /// returned.
    fn write_batch(&self, ops: &[BatchOp], options: &WriteOptions) -> Result<()>;

    /// Release the native handle.
    fn close(self) -> Result<()>;
}

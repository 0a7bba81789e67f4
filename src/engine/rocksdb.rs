use std::path::Path;

use rocksdb::{DB, ReadOptions, WriteBatch};

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::options::{StoreOptions, WriteOptions};
use crate::types::BatchOp;

/// Native LSM store: RocksDB through the `rocksdb` crate.
///
/// Read and write option objects are created per call and released when
/// the call returns, matching the engine's C calling convention.
pub struct RocksDb {
    db: DB,
}

fn native_write_options(options: &WriteOptions) -> rocksdb::WriteOptions {
    let mut wopts = rocksdb::WriteOptions::default();
    wopts.set_sync(options.sync);
    wopts.disable_wal(options.disable_wal);
    wopts
}

impl Engine for RocksDb {
    const NAME: &'static str = "rocksdb";

    fn open(path: &Path, options: &StoreOptions) -> Result<Self> {
        let mut opts = rocksdb::Options::default();
        opts.create_if_missing(options.create_if_missing);

        let db = DB::open(&opts, path).map_err(|e| Error::Open {
            path: path.to_path_buf(),
            message: e.into_string(),
        })?;

        Ok(RocksDb { db })
    }

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let ropts = ReadOptions::default();
        self.db
            .get_opt(key, &ropts)
            .map_err(|e| Error::Read(e.into_string()))
    }

    fn put(&self, key: &[u8], value: &[u8], options: &WriteOptions) -> Result<()> {
        self.db
            .put_opt(key, value, &native_write_options(options))
            .map_err(|e| Error::Write(e.into_string()))
    }

    fn delete(&self, key: &[u8], options: &WriteOptions) -> Result<()> {
        self.db
            .delete_opt(key, &native_write_options(options))
            .map_err(|e| Error::Write(e.into_string()))
    }

    fn write_batch(&self, ops: &[BatchOp], options: &WriteOptions) -> Result<()> {
        let mut batch = WriteBatch::default();
        for op in ops {
            match op {
                BatchOp::Put { key, value } => batch.put(key, value),
                BatchOp::Delete { key } => batch.delete(key),
            }
        }

        self.db
            .write_opt(batch, &native_write_options(options))
            .map_err(|e| Error::Commit(e.into_string()))
    }

    fn close(self) -> Result<()> {
        // DB's Drop calls rocksdb_close.
        drop(self.db);
        Ok(())
    }
}

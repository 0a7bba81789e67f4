use std::cell::RefCell;
use std::path::Path;

use rusty_leveldb::{DB, WriteBatch};

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::options::{StoreOptions, WriteOptions};
use crate::types::BatchOp;

/// Pure-library LSM store: the rusty-leveldb port of LevelDB.
///
/// rusty-leveldb needs `&mut DB` for every call, including reads (the
/// read path may schedule compactions), so the handle sits in a `RefCell`.
pub struct LevelDb {
    db: RefCell<DB>,
}

impl Engine for LevelDb {
    const NAME: &'static str = "leveldb";

    fn open(path: &Path, options: &StoreOptions) -> Result<Self> {
        let mut opts = if options.in_memory {
            rusty_leveldb::in_memory()
        } else {
            rusty_leveldb::Options::default()
        };
        opts.create_if_missing = options.create_if_missing;

        let db = DB::open(path, opts).map_err(|e| Error::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(LevelDb {
            db: RefCell::new(db),
        })
    }

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.db.borrow_mut().get(key).map(|v| v.to_vec()))
    }

    fn put(&self, key: &[u8], value: &[u8], options: &WriteOptions) -> Result<()> {
        let mut db = self.db.borrow_mut();
        let res = if options.sync {
            // DB::put never syncs; a one-entry batch does.
            let mut batch = WriteBatch::default();
            batch.put(key, value);
            db.write(batch, true)
        } else {
            db.put(key, value)
        };
        res.map_err(|e| Error::Write(e.to_string()))
    }

    fn delete(&self, key: &[u8], options: &WriteOptions) -> Result<()> {
        let mut db = self.db.borrow_mut();
        let res = if options.sync {
            let mut batch = WriteBatch::default();
            batch.delete(key);
            db.write(batch, true)
        } else {
            db.delete(key)
        };
        res.map_err(|e| Error::Write(e.to_string()))
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
            .borrow_mut()
            .write(batch, options.sync)
            .map_err(|e| Error::Commit(e.to_string()))
    }

    fn close(self) -> Result<()> {
        let mut db = self.db.into_inner();
        // Persist the memtable; dropping the handle releases the lock file.
        db.flush().map_err(|e| Error::Write(e.to_string()))
    }
}

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::batch::BatchWriter;
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::options::{StoreOptions, WriteOptions};
use crate::replay::KeyValueWriter;

/// Exclusive handle on one open engine connection.
///
/// ```text
///   Store::open ──► put/get/has/delete ──► batch() ──► BatchWriter (borrows)
///        │                                                  │
///        └──────────────── close() (once) ◄──── writer dropped
/// ```
///
/// A `BatchWriter` borrows the store, so `close` (which needs `&mut self`)
/// cannot run while any writer is alive. Close is idempotent; every call
/// after the first is a no-op and any other operation returns
/// `Error::Closed`. Dropping an open store closes it.
pub struct Store<E: Engine> {
    engine: Option<E>,
    path: PathBuf,
}

impl<E: Engine> Store<E> {
    /// Open the store at `path`, creating it if absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, &StoreOptions::default())
    }

    /// Open the store at `path` with explicit options.
    ///
    /// On failure no handle is returned; the engine has already released
    /// whatever it acquired.
    pub fn open_with(path: impl AsRef<Path>, options: &StoreOptions) -> Result<Self> {
        let path = path.as_ref();
        let engine = E::open(path, options)?;
        debug!(engine = E::NAME, path = %path.display(), "store opened");

        Ok(Store {
            engine: Some(engine),
            path: path.to_path_buf(),
        })
    }

    pub(crate) fn engine(&self) -> Result<&E> {
        self.engine.as_ref().ok_or(Error::Closed)
    }

    /// Path the store was opened at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.engine.is_none()
    }

    /// Single-key write with default write options.
    pub fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.engine()?.put(key, value, &WriteOptions::default())
    }

    /// Point read. `None` when the key was never written or was deleted.
    pub fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        self.engine()?.get(key)
    }

    /// True when `get` yields a non-empty value.
    ///
    /// A key stored with an empty value reports `false`, same as a missing
    /// key. Callers that need to tell the two apart must not store empty
    /// values.
    pub fn has(&self, key: &[u8]) -> Result<bool> {
        Ok(self.get(key)?.is_some_and(|v| !v.is_empty()))
    }

    /// Single-key delete with default write options.
    pub fn delete(&self, key: &[u8]) -> Result<()> {
        self.engine()?.delete(key, &WriteOptions::default())
    }

    /// New batch writer bound to this store, using default write options.
    pub fn batch(&self) -> BatchWriter<'_, E> {
        BatchWriter::new(self, WriteOptions::default())
    }

    /// New batch writer bound to this store with its own write options.
    pub fn batch_with(&self, options: WriteOptions) -> BatchWriter<'_, E> {
        BatchWriter::new(self, options)
    }

    /// Release the engine. Later calls are no-ops.
    pub fn close(&mut self) -> Result<()> {
        match self.engine.take() {
            Some(engine) => {
                debug!(engine = E::NAME, path = %self.path.display(), "closing store");
                engine.close()
            }
            None => Ok(()),
        }
    }
}

impl<E: Engine> Drop for Store<E> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!(engine = E::NAME, error = %e, "failed to close store on drop");
        }
    }
}

/// Lets a batch be replayed into a secondary store.
impl<E: Engine> KeyValueWriter for Store<E> {
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        Store::put(self, key, value)
    }

    fn delete(&mut self, key: &[u8]) -> Result<()> {
        Store::delete(self, key)
    }
}

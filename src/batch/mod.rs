pub mod log;

use tracing::debug;

use crate::engine::Engine;
use crate::error::Result;
use crate::options::WriteOptions;
use crate::replay::KeyValueWriter;
use crate::store::Store;
use crate::types::BatchOp;

pub use self::log::OperationLog;

/// Accumulates put/delete operations and commits them atomically.
///
/// Two-phase protocol: accumulate, `write`, then `reset`.
///
/// ```text
///   put/delete ──► OperationLog ──write()──► native batch ──► engine
///                      │                     (built per commit)
///                      ├──replay(sink)──► KeyValueWriter
///                      └──reset()──► empty, size 0
/// ```
///
/// `write` leaves the log untouched, so a just-committed batch can still be
/// replayed. Calling `write` again without `reset` resubmits the same
/// operations.
pub struct BatchWriter<'a, E: Engine> {
    store: &'a Store<E>,
    options: WriteOptions,
    log: OperationLog,
}

impl<'a, E: Engine> BatchWriter<'a, E> {
    /// Create an empty batch bound to `store`.
    pub fn new(store: &'a Store<E>, options: WriteOptions) -> Self {
        BatchWriter {
            store,
            options,
            log: OperationLog::new(),
        }
    }

    /// Buffer a put. Fails only when the store has been closed.
    pub fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.store.engine()?;
        self.log.push_put(key, value);
        Ok(())
    }

    /// Buffer a delete. Fails only when the store has been closed.
    pub fn delete(&mut self, key: &[u8]) -> Result<()> {
        self.store.engine()?;
        self.log.push_delete(key);
        Ok(())
    }

    /// Commit every buffered operation in one engine call.
    ///
    /// Engine rejection surfaces as `Error::Commit` with the engine's
    /// message. Nothing is retried here.
    pub fn write(&self) -> Result<()> {
        let engine = self.store.engine()?;
        debug!(
            engine = E::NAME,
            ops = self.log.len(),
            value_size = self.log.value_size(),
            "committing batch"
        );
        engine.write_batch(self.log.as_slice(), &self.options)
    }

    /// Sum of put value lengths plus one per delete. Callers use it to
    /// decide when to flush.
    pub fn value_size(&self) -> usize {
        self.log.value_size()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Buffered operations in append order.
    pub fn ops(&self) -> &[BatchOp] {
        self.log.as_slice()
    }

    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    /// Discard all buffered operations so the writer can be reused.
    pub fn reset(&mut self) {
        self.log.clear();
    }

    /// Apply the buffered operations, in order, to `sink`.
    pub fn replay<W: KeyValueWriter + ?Sized>(&self, sink: &mut W) -> Result<()> {
        self.log.replay(sink)
    }
}

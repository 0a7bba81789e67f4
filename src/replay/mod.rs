pub mod reader;
pub mod record;
pub mod writer;

pub use reader::ReplayLogReader;
pub use record::ReplayRecord;
pub use writer::ReplayLogWriter;

use crate::error::Result;
use crate::types::BatchOp;

/// Anything a batch can be replayed into.
///
/// Implemented by `Store` (mirror into a secondary store), `RecordingSink`
/// (in-memory capture) and `ReplayLogWriter` (append-only file).
pub trait KeyValueWriter {
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()>;

    fn delete(&mut self, key: &[u8]) -> Result<()>;
}

impl<W: KeyValueWriter + ?Sized> KeyValueWriter for &mut W {
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        (**self).put(key, value)
    }

    fn delete(&mut self, key: &[u8]) -> Result<()> {
        (**self).delete(key)
    }
}

/// Captures every call verbatim, in order. No coalescing.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    ops: Vec<BatchOp>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[BatchOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<BatchOp> {
        self.ops
    }
}

impl KeyValueWriter for RecordingSink {
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.ops.push(BatchOp::put(key, value));
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<()> {
        self.ops.push(BatchOp::delete(key));
        Ok(())
    }
}

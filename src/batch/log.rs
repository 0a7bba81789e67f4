use std::slice;

use crate::error::Result;
use crate::replay::KeyValueWriter;
use crate::types::BatchOp;

/// Ordered record of the put/delete operations appended to a batch.
///
/// Invariant: `value_size()` equals the sum of value lengths over the puts
/// plus one per delete.
#[derive(Debug, Default, Clone)]
pub struct OperationLog {
    ops: Vec<BatchOp>,
    size: usize,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_put(&mut self, key: &[u8], value: &[u8]) {
        self.push(BatchOp::put(key, value));
    }

    pub fn push_delete(&mut self, key: &[u8]) {
        self.push(BatchOp::delete(key));
    }

    pub fn push(&mut self, op: BatchOp) {
        self.size += op.accounted_size();
        self.ops.push(op);
    }

    pub fn value_size(&self) -> usize {
        self.size
    }

    /// Number of operations recorded.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, BatchOp> {
        self.ops.iter()
    }

    pub fn as_slice(&self) -> &[BatchOp] {
        &self.ops
    }

    /// Drop every recorded operation and zero the size counter.
    pub fn clear(&mut self) {
        self.ops.clear();
        self.size = 0;
    }

    /// Apply every operation, in append order, to `sink`.
    ///
    /// Stops at the first sink error. Operations are not coalesced: two puts
    /// to the same key reach the sink as two calls.
    pub fn replay<W: KeyValueWriter + ?Sized>(&self, sink: &mut W) -> Result<()> {
        for op in &self.ops {
            match op {
                BatchOp::Put { key, value } => sink.put(key, value)?,
                BatchOp::Delete { key } => sink.delete(key)?,
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a OperationLog {
    type Item = &'a BatchOp;
    type IntoIter = slice::Iter<'a, BatchOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

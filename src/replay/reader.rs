use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::Result;
use crate::replay::KeyValueWriter;
use crate::replay::record::ReplayRecord;
use crate::types::BatchOp;

/// Reads a replay log back.
///
/// Loads the whole file and decodes record by record. Decoding stops at
/// the first truncated or CRC-mismatched record: the log is append-only,
/// so a bad record marks an interrupted append and nothing valid follows.
pub struct ReplayLogReader {
    data: Vec<u8>,
}

impl ReplayLogReader {
    pub fn new(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        Ok(ReplayLogReader { data })
    }

    pub fn iter(&self) -> ReplayLogIterator<'_> {
        ReplayLogIterator {
            data: &self.data,
            offset: 0,
        }
    }

    /// Every valid operation in the log, in append order.
    pub fn into_ops(self) -> Vec<BatchOp> {
        self.iter().map(ReplayRecord::into_op).collect()
    }

    /// Re-apply the logged operations to `sink`. Returns how many were applied.
    pub fn replay_into<W: KeyValueWriter + ?Sized>(&self, sink: &mut W) -> Result<usize> {
        let mut applied = 0;
        for record in self.iter() {
            match record.into_op() {
                BatchOp::Put { key, value } => sink.put(&key, &value)?,
                BatchOp::Delete { key } => sink.delete(&key)?,
            }
            applied += 1;
        }
        Ok(applied)
    }
}

pub struct ReplayLogIterator<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Iterator for ReplayLogIterator<'a> {
    type Item = ReplayRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.data.len() {
            return None;
        }

        match ReplayRecord::decode(&self.data[self.offset..]) {
            Ok(record) => {
                self.offset += record.encoded_size();
                Some(record)
            }
            Err(e) => {
                warn!(offset = self.offset, error = %e, "replay log ends in a bad record");
                // Stop for good.
                self.offset = self.data.len();
                None
            }
        }
    }
}

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::replay::KeyValueWriter;
use crate::replay::record::ReplayRecord;

/// Appends replayed operations to a file as checksummed records.
///
/// Used as a `KeyValueWriter` sink to mirror a batch into a durable log
/// without re-reading the engine's native batch encoding.
///
/// Two layers of buffering:
///   BufWriter.flush()  → Rust buffer → OS page cache   (every append)
///   file.sync_all()    → OS page cache → physical disk (`sync`)
pub struct ReplayLogWriter {
    writer: BufWriter<File>,
    offset: u64,
}

impl ReplayLogWriter {
    /// Open (or create) a replay log at `path`, appending to existing records.
    pub fn new(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let offset = file.metadata()?.len();

        Ok(ReplayLogWriter {
            writer: BufWriter::new(file),
            offset,
        })
    }

    pub fn append(&mut self, record: &ReplayRecord) -> Result<()> {
        let encoded = record.encode();

        self.writer.write_all(&encoded)?;
        self.writer.flush()?;
        self.offset += encoded.len() as u64;
        Ok(())
    }

    /// Force fsync to disk.
    pub fn sync(&mut self) -> Result<()> {
        self.writer.flush()?;
        self.writer.get_ref().sync_all()?;
        Ok(())
    }

    /// Current file length in bytes.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl KeyValueWriter for ReplayLogWriter {
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.append(&ReplayRecord::put(key.to_vec(), value.to_vec()))
    }

    fn delete(&mut self, key: &[u8]) -> Result<()> {
        self.append(&ReplayRecord::delete(key.to_vec()))
    }
}

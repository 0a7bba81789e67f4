/// Options applied when a store is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Create the database if the path holds none yet.
    pub create_if_missing: bool,
    /// Keep the database in memory instead of on disk. Only honoured by
    /// engines that have an in-memory environment (rusty-leveldb).
    pub in_memory: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            create_if_missing: true,
            in_memory: false,
        }
    }
}

impl StoreOptions {
    /// Options for a throwaway in-memory store.
    pub fn in_memory() -> Self {
        StoreOptions {
            in_memory: true,
            ..Self::default()
        }
    }
}

/// Controls durability of a single write or a batch commit.
///
/// Trade-off: durability vs throughput.
///   - sync = false: the engine acknowledges once the write reaches its log
///     buffer; a machine crash can lose the tail.
///   - sync = true: fsync before acknowledging. Much slower per commit,
///     which is why batching matters.
///
/// Both engines default to not syncing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// fsync the engine's log before the write returns.
    pub sync: bool,
    /// Skip the engine's write-ahead log entirely (RocksDB only).
    pub disable_wal: bool,
}

impl WriteOptions {
    pub fn synced() -> Self {
        WriteOptions {
            sync: true,
            ..Self::default()
        }
    }
}

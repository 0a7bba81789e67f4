/// Raw key bytes.
pub type Key = Vec<u8>;

/// Raw value bytes.
pub type Value = Vec<u8>;

/// Distinguishes puts from deletes in a batch and in the replay log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// A normal put operation.
    Put = 0x01,
    /// A delete.
    Delete = 0x02,
}

/// One buffered operation of a batch.
///
/// Operations are immutable once appended. Order matters: when a batch is
/// committed or replayed, a later operation on the same key overrides an
/// earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOp {
    Put { key: Key, value: Value },
    Delete { key: Key },
}

impl BatchOp {
    pub fn put(key: impl Into<Key>, value: impl Into<Value>) -> Self {
        BatchOp::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn delete(key: impl Into<Key>) -> Self {
        BatchOp::Delete { key: key.into() }
    }

    pub fn kind(&self) -> OpKind {
        match self {
            BatchOp::Put { .. } => OpKind::Put,
            BatchOp::Delete { .. } => OpKind::Delete,
        }
    }

    pub fn key(&self) -> &[u8] {
        match self {
            BatchOp::Put { key, .. } | BatchOp::Delete { key } => key,
        }
    }

    /// Contribution of this operation to a batch's value size.
    ///
    /// A put counts its value length; a delete counts as one unit. This is
    /// an accounting convention for flush decisions, not a byte count.
    pub fn accounted_size(&self) -> usize {
        match self {
            BatchOp::Put { value, .. } => value.len(),
            BatchOp::Delete { .. } => 1,
        }
    }
}

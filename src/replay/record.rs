use crate::error::{Error, Result};
use crate::types::{BatchOp, OpKind};

impl OpKind {
    fn from_u8(byte: u8) -> Result<Self> {
        match byte {
            0x01 => Ok(OpKind::Put),
            0x02 => Ok(OpKind::Delete),
            _ => Err(Error::Corruption(format!("invalid op type: {}", byte))),
        }
    }
}

/// One replayed operation as stored in a replay log file.
///
/// On-disk format:
/// ```text
/// ┌──────────┬────────┬──────────┬────────────┬───────────┬───────────┐
/// │ CRC (4B) │ Len(4B)│ Type(1B) │ Key Len(4B)│ Key (var) │ Val (var) │
/// └──────────┴────────┴──────────┴────────────┴───────────┴───────────┘
/// ```
///
/// Len counts everything after the Len field. CRC covers everything after
/// the CRC field. Deletes carry an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayRecord {
    pub kind: OpKind,
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

const CRC_SIZE: usize = 4;
const LEN_SIZE: usize = 4;
const TYPE_SIZE: usize = 1;
const KEY_LEN_SIZE: usize = 4;
const HEADER_SIZE: usize = CRC_SIZE + LEN_SIZE + TYPE_SIZE + KEY_LEN_SIZE;

fn read_u32(data: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}

impl ReplayRecord {
    pub fn put(key: Vec<u8>, value: Vec<u8>) -> Self {
        ReplayRecord {
            kind: OpKind::Put,
            key,
            value,
        }
    }

    pub fn delete(key: Vec<u8>) -> Self {
        ReplayRecord {
            kind: OpKind::Delete,
            key,
            value: Vec::new(),
        }
    }

    /// Serialize this record, CRC header included.
    pub fn encode(&self) -> Vec<u8> {
        let payload_len = TYPE_SIZE + KEY_LEN_SIZE + self.key.len() + self.value.len();
        let mut buf = Vec::with_capacity(CRC_SIZE + LEN_SIZE + payload_len);

        // CRC placeholder, filled once the rest is written
        buf.extend_from_slice(&[0u8; CRC_SIZE]);
        buf.extend_from_slice(&(payload_len as u32).to_le_bytes());
        buf.push(self.kind as u8);
        buf.extend_from_slice(&(self.key.len() as u32).to_le_bytes());
        buf.extend_from_slice(&self.key);
        buf.extend_from_slice(&self.value);

        let crc = crc32fast::hash(&buf[CRC_SIZE..]);
        buf[..CRC_SIZE].copy_from_slice(&crc.to_le_bytes());

        buf
    }

    /// Deserialize one record from the front of `data`.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::Corruption("record too short".into()));
        }

        let stored_crc = read_u32(data, 0);
        let payload_len = read_u32(data, CRC_SIZE) as usize;

        let total_len = CRC_SIZE + LEN_SIZE + payload_len;
        if payload_len < TYPE_SIZE + KEY_LEN_SIZE || data.len() < total_len {
            return Err(Error::Corruption("record truncated".into()));
        }

        if crc32fast::hash(&data[CRC_SIZE..total_len]) != stored_crc {
            return Err(Error::Corruption("CRC mismatch".into()));
        }

        let mut offset = CRC_SIZE + LEN_SIZE;
        let kind = OpKind::from_u8(data[offset])?;
        offset += TYPE_SIZE;

        let key_len = read_u32(data, offset) as usize;
        offset += KEY_LEN_SIZE;
        if offset + key_len > total_len {
            return Err(Error::Corruption("key length exceeds record".into()));
        }
        let key = data[offset..offset + key_len].to_vec();
        offset += key_len;

        let value = data[offset..total_len].to_vec();
        if kind == OpKind::Delete && !value.is_empty() {
            return Err(Error::Corruption("delete record carries a value".into()));
        }

        Ok(ReplayRecord { kind, key, value })
    }

    /// Size of this record when serialized.
    pub fn encoded_size(&self) -> usize {
        HEADER_SIZE + self.key.len() + self.value.len()
    }

    pub fn into_op(self) -> BatchOp {
        match self.kind {
            OpKind::Put => BatchOp::Put {
                key: self.key,
                value: self.value,
            },
            OpKind::Delete => BatchOp::Delete { key: self.key },
        }
    }
}

impl From<&BatchOp> for ReplayRecord {
    fn from(op: &BatchOp) -> Self {
        match op {
            BatchOp::Put { key, value } => ReplayRecord::put(key.clone(), value.clone()),
            BatchOp::Delete { key } => ReplayRecord::delete(key.clone()),
        }
    }
}

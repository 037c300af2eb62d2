use serde::{Serialize, Deserialize};

use crate::core::error::{Error, ErrorKind, Result};
use crate::index::tfidf::VectorIndex;

/// Bump when the serialized index layout changes.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    index: &'a VectorIndex,
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    index: VectorIndex,
}

impl VectorIndex {
    /// Serialize the index into a version-prefixed byte buffer. Storage and
    /// transport of the buffer are the caller's business.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let envelope = EnvelopeRef {
            version: SNAPSHOT_VERSION,
            index: self,
        };
        Ok(bincode::serialize(&envelope)?)
    }

    /// Restore an index from a snapshot buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let envelope: Envelope = bincode::deserialize(bytes)?;
        if envelope.version != SNAPSHOT_VERSION {
            return Err(Error::new(
                ErrorKind::Snapshot,
                format!(
                    "unsupported snapshot version {} (expected {})",
                    envelope.version, SNAPSHOT_VERSION
                ),
            ));
        }
        Ok(envelope.index)
    }
}

//! The final (Huffman) container format.
//!
//! Layout, little-endian throughout:
//!
//! ```text
//! offset 0   serialized code-table length (u32)
//! offset 4   serialized code table (JSON)
//! then       bit-packed payload, MSB-first, final byte zero-padded
//! ```
//!
//! The serialized table is a JSON envelope holding the byte-to-code map
//! together with the exact payload bit length. Carrying the bit length
//! inside the table blob keeps the container layout to a single 4-byte
//! header while removing the padding ambiguity: without it, right-padded
//! zeros would decode as extra symbols whenever the all-zeros code path
//! is shorter than the padding, including the single-code table a
//! uniform payload produces.

use crate::table::CodeTable;
use oxipix_core::error::{PixError, Result};
use serde::{Deserialize, Serialize};

/// Size of the table-length header in bytes.
pub const HUFF_HEADER_SIZE: usize = 4;

/// The serialized form of the code table and payload bit length.
#[derive(Debug, Serialize, Deserialize)]
struct TableEnvelope {
    /// Exact number of meaningful payload bits.
    bits: u64,
    /// Byte-to-code map.
    codes: CodeTable,
}

/// A Huffman container: code table, bit length, and packed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffContainer {
    /// The code table the payload was encoded with.
    pub table: CodeTable,
    /// Exact number of meaningful bits in `payload`.
    pub bit_len: u64,
    /// The bit-packed payload.
    pub payload: Vec<u8>,
}

impl HuffContainer {
    /// Create a container from its parts.
    pub fn new(table: CodeTable, bit_len: u64, payload: Vec<u8>) -> Self {
        Self {
            table,
            bit_len,
            payload,
        }
    }

    /// Serialize: 4-byte table length, serialized table, packed payload.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let envelope = serde_json::to_vec(&TableEnvelope {
            bits: self.bit_len,
            codes: self.table.clone(),
        })
        .map_err(|e| PixError::malformed_header(format!("code table serialization: {e}")))?;

        let mut out = Vec::with_capacity(HUFF_HEADER_SIZE + envelope.len() + self.payload.len());
        out.extend_from_slice(&(envelope.len() as u32).to_le_bytes());
        out.extend_from_slice(&envelope);
        out.extend_from_slice(&self.payload);
        Ok(out)
    }

    /// Parse a container from bytes.
    ///
    /// Fails with [`PixError::TruncatedContainer`] when the header, the
    /// declared table, or the packed payload is shorter than implied,
    /// and with [`PixError::MalformedHeader`] when the table bytes do
    /// not deserialize.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < HUFF_HEADER_SIZE {
            return Err(PixError::truncated(HUFF_HEADER_SIZE, data.len()));
        }

        let table_len =
            u32::from_le_bytes(data[0..4].try_into().expect("slice length checked")) as usize;
        let table_end = HUFF_HEADER_SIZE + table_len;
        if table_end > data.len() {
            return Err(PixError::truncated(table_end, data.len()));
        }

        let envelope: TableEnvelope = serde_json::from_slice(&data[HUFF_HEADER_SIZE..table_end])
            .map_err(|e| PixError::malformed_header(format!("code table deserialization: {e}")))?;

        let payload = data[table_end..].to_vec();
        let needed_bytes = envelope.bits.div_ceil(8) as usize;
        if needed_bytes > payload.len() {
            return Err(PixError::truncated(
                table_end + needed_bytes,
                data.len(),
            ));
        }

        Ok(Self {
            table: envelope.codes,
            bit_len: envelope.bits,
            payload,
        })
    }
}

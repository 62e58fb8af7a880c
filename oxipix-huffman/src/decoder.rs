//! Huffman decoder (decompression).

use crate::table::CodeTable;
use oxipix_core::bitstream::BitReader;
use oxipix_core::error::{PixError, Result};

/// Decode a packed bit stream against its code table.
///
/// Scans `bit_len` bits, accumulating a candidate code and emitting a
/// byte whenever the candidate matches a table entry. Bits past
/// `bit_len` are padding and are never examined; a partial candidate
/// left at the end of the stream is discarded. Fails with
/// [`PixError::UnknownCode`] if the candidate outgrows every code in the
/// table, which only happens for a corrupted payload or a table that
/// does not belong to it.
pub fn decode(packed: &[u8], bit_len: u64, table: &CodeTable) -> Result<Vec<u8>> {
    let inverted = table.inverted();
    let max_len = table.max_code_len();

    let mut reader = BitReader::new(packed);
    let mut output = Vec::new();
    let mut candidate = String::new();

    for _ in 0..bit_len {
        candidate.push(if reader.read_bit()? { '1' } else { '0' });

        if let Some(&byte) = inverted.get(&candidate) {
            output.push(byte);
            candidate.clear();
        } else if candidate.len() > max_len {
            return Err(PixError::unknown_code(reader.bit_position()));
        }
    }

    Ok(output)
}

//! Huffman encoder (compression).

use crate::table::CodeTable;
use oxipix_core::bitstream::BitWriter;

/// The result of encoding one payload.
#[derive(Debug)]
pub struct Encoded {
    /// The code table built from the payload's histogram.
    pub table: CodeTable,
    /// The concatenated codes, packed 8 bits per byte MSB-first with the
    /// final byte zero-padded on the right.
    pub packed: Vec<u8>,
    /// Exact number of meaningful bits in `packed`.
    pub bit_len: u64,
}

/// Encode a payload with a per-payload Huffman code.
///
/// Builds the frequency histogram over the exact input, derives the code
/// table, then maps every byte to its code and concatenates the codes
/// into one bit stream.
pub fn encode(payload: &[u8]) -> Encoded {
    let table = CodeTable::from_payload(payload);
    let mut writer = BitWriter::new();

    for &byte in payload {
        let code = table
            .code(byte)
            .expect("BUG: every payload byte has a histogram entry and therefore a code");
        for bit in code.bytes() {
            writer.write_bit(bit == b'1');
        }
    }

    let bit_len = writer.bit_len();
    Encoded {
        table,
        packed: writer.into_vec(),
        bit_len,
    }
}

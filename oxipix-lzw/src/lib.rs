//! # OxiPix LZW
//!
//! The dictionary stage of the OxiPix pipeline: an adaptive-dictionary
//! LZW compressor and decompressor over byte sequences, plus the
//! container that carries its output.
//!
//! ## Algorithm
//!
//! The dictionary is seeded with the 256 single-byte strings at codes
//! 0-255 and grows by one entry per emitted code, up to 65536 entries.
//! Codes are a fixed 16 bits wide. Once the table is full no further
//! entries are registered but encoding continues with the existing
//! entries; the capacity bound is not an error.
//!
//! ## Container
//!
//! An 8-byte little-endian dimensions header (width u32, height u32)
//! followed by the code stream as consecutive little-endian u16 values.
//! See [`container`].
//!
//! ## Example
//!
//! ```rust
//! use oxipix_lzw::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let codes = compress(original);
//! assert!(codes.len() < original.len());
//!
//! let decoded = decompress(&codes).unwrap();
//! assert_eq!(decoded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod container;
mod decoder;
mod dictionary;
mod encoder;

pub use container::{LZW_HEADER_SIZE, LzwContainer};
pub use decoder::LzwDecoder;
pub use dictionary::{LzwDictionary, MAX_CODES, SEED_CODES};
pub use encoder::LzwEncoder;

use oxipix_core::error::Result;

/// Compress a byte sequence into LZW codes.
pub fn compress(data: &[u8]) -> Vec<u16> {
    LzwEncoder::new().encode(data)
}

/// Decompress a sequence of LZW codes back into bytes.
pub fn decompress(codes: &[u16]) -> Result<Vec<u8>> {
    LzwDecoder::new().decode(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_simple() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let codes = compress(original);
        assert_eq!(decompress(&codes).unwrap(), original);
    }

    #[test]
    fn test_roundtrip_empty() {
        assert!(compress(&[]).is_empty());
        assert!(decompress(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_roundtrip_repeated_phrase() {
        let original = b"This is a test of compression! ".repeat(10);
        let codes = compress(&original);
        assert!(codes.len() < original.len());
        assert_eq!(decompress(&codes).unwrap(), original);
    }

    #[test]
    fn test_roundtrip_multiple_sizes() {
        for size in [1, 2, 3, 255, 256, 257, 1000, 4096] {
            let original = vec![b'A'; size];
            let codes = compress(&original);
            let decoded = decompress(&codes).unwrap();
            assert_eq!(decoded, original, "mismatch for size {size}");
        }
    }
}

//! # OxiPix Huffman
//!
//! The entropy stage of the OxiPix pipeline: per-payload Huffman coding
//! over byte sequences, plus the final container that carries the code
//! table alongside the bit-packed payload.
//!
//! Each payload gets its own code, built from its exact byte-frequency
//! histogram: the two lowest-frequency nodes are merged repeatedly into
//! a binary tree, then a depth-first walk (`0` left, `1` right) assigns
//! every leaf its bit-string. The table is prefix-free by construction
//! and is serialized into the container, so a payload is self-decodable
//! with no external state.
//!
//! ## Example
//!
//! ```rust
//! use oxipix_huffman::{compress, decompress};
//!
//! let original = b"abracadabra abracadabra";
//! let container = compress(original).unwrap();
//! let decoded = decompress(&container).unwrap();
//! assert_eq!(decoded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod container;
mod decoder;
mod encoder;
mod table;
mod tree;

pub use container::{HUFF_HEADER_SIZE, HuffContainer};
pub use decoder::decode;
pub use encoder::{Encoded, encode};
pub use table::CodeTable;

use oxipix_core::error::Result;

/// Compress a payload into a serialized Huffman container.
pub fn compress(payload: &[u8]) -> Result<Vec<u8>> {
    let encoded = encode(payload);
    HuffContainer::new(encoded.table, encoded.bit_len, encoded.packed).to_bytes()
}

/// Decompress a serialized Huffman container back into its payload.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let container = HuffContainer::from_bytes(data)?;
    decode(&container.payload, container.bit_len, &container.table)
}

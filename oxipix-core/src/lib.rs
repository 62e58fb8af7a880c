//! # OxiPix Core
//!
//! Core components for the OxiPix compression pipeline.
//!
//! This crate provides the building blocks shared by every stage:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for Huffman payloads
//! - [`dims`]: validated image dimensions and row-padding arithmetic
//! - [`error`]: the shared error type
//!
//! ## Architecture
//!
//! OxiPix is a layered codec pipeline:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ L3: Pipeline                                         │
//! │     compress/decompress orchestration, CLI           │
//! ├──────────────────────────────────────────────────────┤
//! │ L2: Codecs                                           │
//! │     LZW dictionary stage, Huffman entropy stage      │
//! ├──────────────────────────────────────────────────────┤
//! │ L1: Containers                                       │
//! │     BMP header, LZW header+codes, Huffman table+bits │
//! ├──────────────────────────────────────────────────────┤
//! │ L0: This crate                                       │
//! │     BitReader/BitWriter, Dimensions, PixError        │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxipix_core::bitstream::{BitReader, BitWriter};
//! use oxipix_core::dims::Dimensions;
//!
//! let mut writer = BitWriter::new();
//! writer.write_bit(true);
//! writer.write_bit(false);
//! let packed = writer.into_vec();
//!
//! let mut reader = BitReader::new(&packed);
//! assert!(reader.read_bit().unwrap());
//!
//! let dims = Dimensions::new(640, 480).unwrap();
//! assert_eq!(dims.pixel_len(), 640 * 480 * 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod dims;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use dims::{BYTES_PER_PIXEL, Dimensions, MAX_DIMENSION};
pub use error::{PixError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::dims::{Dimensions, MAX_DIMENSION};
    pub use crate::error::{PixError, Result};
}

//! The LZW container format.
//!
//! Layout, little-endian throughout:
//!
//! ```text
//! offset 0   width  (u32)
//! offset 4   height (u32)
//! offset 8   codes, one u16 each
//! ```
//!
//! The dimensions describe the pixel buffer the code stream decodes to,
//! so the downstream bitmap stage can rebuild its container without any
//! external state.

use oxipix_core::dims::Dimensions;
use oxipix_core::error::{PixError, Result};

/// Size of the dimensions header in bytes.
pub const LZW_HEADER_SIZE: usize = 8;

/// An LZW container: image dimensions plus the emitted code stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LzwContainer {
    /// Dimensions of the image the codes decode to.
    pub dims: Dimensions,
    /// The emitted 16-bit codes.
    pub codes: Vec<u16>,
}

impl LzwContainer {
    /// Create a container from dimensions and a code stream.
    pub fn new(dims: Dimensions, codes: Vec<u16>) -> Self {
        Self { dims, codes }
    }

    /// Serialize: 8-byte dimensions header followed by the codes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(LZW_HEADER_SIZE + self.codes.len() * 2);
        out.extend_from_slice(&self.dims.width().to_le_bytes());
        out.extend_from_slice(&self.dims.height().to_le_bytes());
        for &code in &self.codes {
            out.extend_from_slice(&code.to_le_bytes());
        }
        out
    }

    /// Parse a container from bytes.
    ///
    /// Fails with [`PixError::TruncatedContainer`] when the header is
    /// incomplete or a trailing byte cannot form a whole code, and with
    /// [`PixError::MalformedHeader`] when the dimensions are out of
    /// range.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < LZW_HEADER_SIZE {
            return Err(PixError::truncated(LZW_HEADER_SIZE, data.len()));
        }

        let width = u32::from_le_bytes(data[0..4].try_into().expect("slice length checked"));
        let height = u32::from_le_bytes(data[4..8].try_into().expect("slice length checked"));
        let dims = Dimensions::new(width, height)?;

        let code_bytes = &data[LZW_HEADER_SIZE..];
        if code_bytes.len() % 2 != 0 {
            return Err(PixError::truncated(data.len() + 1, data.len()));
        }

        let codes = code_bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes(pair.try_into().expect("chunk length is 2")))
            .collect();

        Ok(Self { dims, codes })
    }
}

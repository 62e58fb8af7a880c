//! # OxiPix Bitmap
//!
//! Parsing and writing of the uncompressed 24-bit bitmap container.
//!
//! A bitmap file stores rows bottom-to-top, each row padded to a 4-byte
//! boundary. This crate converts between that on-disk layout and a
//! [`PixelImage`]: a contiguous top-to-bottom pixel buffer with no
//! padding, 3 bytes per pixel. Channel bytes pass through verbatim in
//! both directions, so the buffer keeps the container's BGR sample order.
//!
//! ## Example
//!
//! ```rust
//! use oxipix_bitmap::{PixelImage, build_container, extract_pixels};
//! use oxipix_core::Dimensions;
//!
//! let dims = Dimensions::new(2, 2).unwrap();
//! let image = PixelImage::new(dims, vec![7u8; dims.pixel_len()]).unwrap();
//!
//! let bmp = build_container(&image);
//! let restored = extract_pixels(&bmp).unwrap();
//! assert_eq!(restored, image);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod header;

pub use header::{BmpHeader, HEADER_SIZE};

use oxipix_core::dims::{BYTES_PER_PIXEL, Dimensions};
use oxipix_core::error::{PixError, Result};

/// A decoded image: contiguous row-major pixel bytes, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    dims: Dimensions,
    data: Vec<u8>,
}

impl PixelImage {
    /// Create an image, checking that the buffer matches the dimensions.
    pub fn new(dims: Dimensions, data: Vec<u8>) -> Result<Self> {
        if data.len() != dims.pixel_len() {
            return Err(PixError::malformed_header(format!(
                "pixel buffer is {} bytes, dimensions {}x{} require {}",
                data.len(),
                dims.width(),
                dims.height(),
                dims.pixel_len()
            )));
        }
        Ok(Self { dims, data })
    }

    /// Image dimensions.
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// The contiguous pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image, returning dimensions and pixel bytes.
    pub fn into_parts(self) -> (Dimensions, Vec<u8>) {
        (self.dims, self.data)
    }
}

/// Extract the pixel data from a bitmap container.
///
/// Reads the header, then copies each padded bottom-up source row into
/// the contiguous top-down output buffer, dropping the row padding.
pub fn extract_pixels(bmp: &[u8]) -> Result<PixelImage> {
    let header = BmpHeader::parse(bmp)?;
    let dims = header.dims;

    let pixel_offset = header.pixel_data_offset as usize;
    let row_size = dims.row_size();
    let row_bytes = dims.width() as usize * BYTES_PER_PIXEL;
    let height = dims.height() as usize;

    let pixel_end = pixel_offset + dims.padded_len();
    if pixel_end > bmp.len() {
        return Err(PixError::malformed_header(format!(
            "pixel data [{pixel_offset}, {pixel_end}) outside {}-byte buffer",
            bmp.len()
        )));
    }

    let mut data = vec![0u8; dims.pixel_len()];
    for row in 0..height {
        // Stored row 0 is the bottom image row.
        let src = pixel_offset + (height - 1 - row) * row_size;
        let dst = row * row_bytes;
        data[dst..dst + row_bytes].copy_from_slice(&bmp[src..src + row_bytes]);
    }

    PixelImage::new(dims, data)
}

/// Build a bitmap container from an image.
///
/// Emits the fixed 54-byte header followed by the rows bottom-to-top,
/// each zero-padded to a 4-byte boundary. The inverse of
/// [`extract_pixels`]: `extract_pixels(&build_container(&img))` yields
/// `img`, and rebuilding any container produced here is byte-identical.
pub fn build_container(image: &PixelImage) -> Vec<u8> {
    let dims = image.dims();
    let row_size = dims.row_size();
    let row_bytes = dims.width() as usize * BYTES_PER_PIXEL;
    let height = dims.height() as usize;
    let padding = row_size - row_bytes;

    let mut out = Vec::with_capacity(HEADER_SIZE + dims.padded_len());
    out.extend_from_slice(&BmpHeader::encode(dims));

    for row in (0..height).rev() {
        let start = row * row_bytes;
        out.extend_from_slice(&image.data()[start..start + row_bytes]);
        out.extend(std::iter::repeat_n(0u8, padding));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image(width: u32, height: u32) -> PixelImage {
        let dims = Dimensions::new(width, height).unwrap();
        let data: Vec<u8> = (0..dims.pixel_len()).map(|i| (i % 251) as u8).collect();
        PixelImage::new(dims, data).unwrap()
    }

    #[test]
    fn test_roundtrip_padded_rows() {
        // 3 pixels per row = 9 bytes, padded to 12
        let image = sample_image(3, 4);
        let bmp = build_container(&image);
        assert_eq!(bmp.len(), HEADER_SIZE + 12 * 4);

        let restored = extract_pixels(&bmp).unwrap();
        assert_eq!(restored, image);
    }

    #[test]
    fn test_roundtrip_aligned_rows() {
        // 4 pixels per row = 12 bytes, no padding
        let image = sample_image(4, 2);
        let restored = extract_pixels(&build_container(&image)).unwrap();
        assert_eq!(restored, image);
    }

    #[test]
    fn test_container_roundtrip_byte_identical() {
        let image = sample_image(5, 3);
        let bmp = build_container(&image);
        let rebuilt = build_container(&extract_pixels(&bmp).unwrap());
        assert_eq!(rebuilt, bmp);
    }

    #[test]
    fn test_rows_stored_bottom_up() {
        let dims = Dimensions::new(1, 2).unwrap();
        // top row [1,2,3], bottom row [4,5,6]
        let image = PixelImage::new(dims, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let bmp = build_container(&image);

        // bottom row is stored first, padded from 3 to 4 bytes
        assert_eq!(&bmp[HEADER_SIZE..HEADER_SIZE + 4], &[4, 5, 6, 0]);
        assert_eq!(&bmp[HEADER_SIZE + 4..HEADER_SIZE + 8], &[1, 2, 3, 0]);
    }

    #[test]
    fn test_single_pixel() {
        let dims = Dimensions::new(1, 1).unwrap();
        let image = PixelImage::new(dims, vec![10, 20, 30]).unwrap();
        let restored = extract_pixels(&build_container(&image)).unwrap();
        assert_eq!(restored.data(), &[10, 20, 30]);
    }

    #[test]
    fn test_rejects_truncated_pixel_data() {
        let image = sample_image(3, 3);
        let mut bmp = build_container(&image);
        bmp.truncate(bmp.len() - 5);
        assert!(matches!(
            extract_pixels(&bmp),
            Err(PixError::MalformedHeader { .. })
        ));
    }

    #[test]
    fn test_rejects_mismatched_buffer() {
        let dims = Dimensions::new(2, 2).unwrap();
        assert!(matches!(
            PixelImage::new(dims, vec![0u8; 5]),
            Err(PixError::MalformedHeader { .. })
        ));
    }
}

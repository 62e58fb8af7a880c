//! 54-byte uncompressed bitmap header parsing and writing.

use oxipix_core::dims::Dimensions;
use oxipix_core::error::{PixError, Result};

/// Bitmap magic bytes ("BM").
pub const BMP_MAGIC: [u8; 2] = [0x42, 0x4D];

/// Total size of the file header plus info header.
pub const HEADER_SIZE: usize = 54;

/// Size of the info header (BITMAPINFOHEADER).
pub const INFO_HEADER_SIZE: u32 = 40;

/// Only uncompressed 24-bit images are supported.
pub const BITS_PER_PIXEL: u16 = 24;

/// Fixed print resolution, pixels per meter (roughly 72 DPI).
pub const RESOLUTION_PPM: u32 = 2835;

/// Parsed fields of a bitmap header.
///
/// Only the fields the pixel extractor needs are retained; the rest of
/// the 54 bytes is validated on parse and regenerated on write.
#[derive(Debug, Clone, Copy)]
pub struct BmpHeader {
    /// Offset from the start of the file to the pixel data.
    pub pixel_data_offset: u32,
    /// Image dimensions.
    pub dims: Dimensions,
}

fn read_u16_le(data: &[u8], offset: usize) -> Result<u16> {
    let bytes: [u8; 2] = data
        .get(offset..offset + 2)
        .ok_or_else(|| {
            PixError::malformed_header(format!("field at offset {offset} outside buffer"))
        })?
        .try_into()
        .expect("slice length checked");
    Ok(u16::from_le_bytes(bytes))
}

fn read_u32_le(data: &[u8], offset: usize) -> Result<u32> {
    let bytes: [u8; 4] = data
        .get(offset..offset + 4)
        .ok_or_else(|| {
            PixError::malformed_header(format!("field at offset {offset} outside buffer"))
        })?
        .try_into()
        .expect("slice length checked");
    Ok(u32::from_le_bytes(bytes))
}

impl BmpHeader {
    /// Parse and validate a bitmap header from the start of `data`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(PixError::malformed_header(format!(
                "bitmap shorter than {HEADER_SIZE}-byte header ({} bytes)",
                data.len()
            )));
        }

        if data[0..2] != BMP_MAGIC {
            return Err(PixError::malformed_header(format!(
                "bad magic {:02X?}, expected {:02X?}",
                &data[0..2],
                BMP_MAGIC
            )));
        }

        let pixel_data_offset = read_u32_le(data, 10)?;
        let width = read_u32_le(data, 18)?;
        let height = read_u32_le(data, 22)?;
        let bits_per_pixel = read_u16_le(data, 28)?;
        let compression = read_u32_le(data, 30)?;

        if bits_per_pixel != BITS_PER_PIXEL {
            return Err(PixError::malformed_header(format!(
                "unsupported bit depth {bits_per_pixel}, only {BITS_PER_PIXEL}-bit images are supported"
            )));
        }
        if compression != 0 {
            return Err(PixError::malformed_header(format!(
                "unsupported compression method {compression}, only uncompressed images are supported"
            )));
        }

        let dims = Dimensions::new(width, height)?;

        if (pixel_data_offset as usize) > data.len() {
            return Err(PixError::malformed_header(format!(
                "pixel data offset {pixel_data_offset} outside {}-byte buffer",
                data.len()
            )));
        }

        Ok(Self {
            pixel_data_offset,
            dims,
        })
    }

    /// Encode the fixed 54-byte header for an image of the given size.
    ///
    /// The pixel data offset is always [`HEADER_SIZE`] and the image size
    /// field reflects row-padded pixel data.
    pub fn encode(dims: Dimensions) -> [u8; HEADER_SIZE] {
        let padded_len = dims.padded_len() as u32;
        let mut header = [0u8; HEADER_SIZE];

        header[0..2].copy_from_slice(&BMP_MAGIC);
        header[2..6].copy_from_slice(&(HEADER_SIZE as u32 + padded_len).to_le_bytes());
        // bytes 6..10 reserved, zero
        header[10..14].copy_from_slice(&(HEADER_SIZE as u32).to_le_bytes());
        header[14..18].copy_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
        header[18..22].copy_from_slice(&dims.width().to_le_bytes());
        header[22..26].copy_from_slice(&dims.height().to_le_bytes());
        header[26..28].copy_from_slice(&1u16.to_le_bytes());
        header[28..30].copy_from_slice(&BITS_PER_PIXEL.to_le_bytes());
        // bytes 30..34 compression, zero
        header[34..38].copy_from_slice(&padded_len.to_le_bytes());
        header[38..42].copy_from_slice(&RESOLUTION_PPM.to_le_bytes());
        header[42..46].copy_from_slice(&RESOLUTION_PPM.to_le_bytes());
        // bytes 46..54 palette and important colors, zero

        header
    }
}

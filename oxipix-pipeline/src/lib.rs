//! # OxiPix Pipeline
//!
//! Composition of the three codec stages into whole compress and
//! decompress operations:
//!
//! ```text
//! compress:   bitmap bytes -> pixel bytes -> LZW container -> final container
//! decompress: final container -> LZW container -> pixel bytes -> bitmap bytes
//! ```
//!
//! Each operation is synchronous and self-contained: a stage only starts
//! once the previous stage's complete output is available, and distinct
//! operations share no mutable state. Any stage failure aborts the whole
//! operation and propagates its error; nothing is retried here.
//!
//! The byte-level API ([`compress`], [`decompress`]) works purely in
//! memory. The file-level API ([`compress_file`], [`decompress_file`])
//! additionally materializes the intermediate LZW container as a `.lzw`
//! file, deletes it once the next stage has durably consumed it, and
//! writes the final output through a rename so an aborted operation
//! never leaves a partial result behind.
//!
//! ## Example
//!
//! ```rust
//! use oxipix_bitmap::{PixelImage, build_container};
//! use oxipix_core::Dimensions;
//!
//! let dims = Dimensions::new(2, 2).unwrap();
//! let bmp = build_container(&PixelImage::new(dims, vec![9u8; 12]).unwrap());
//!
//! let packed = oxipix_pipeline::compress(&bmp).unwrap();
//! let restored = oxipix_pipeline::decompress(&packed).unwrap();
//! assert_eq!(restored, bmp);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod artifact;

pub use artifact::TempArtifact;

use log::{debug, info};
use oxipix_bitmap::{PixelImage, build_container, extract_pixels};
use oxipix_core::error::Result;
use oxipix_lzw::LzwContainer;
use std::path::{Path, PathBuf};

/// File extension of the intermediate LZW container.
pub const LZW_EXTENSION: &str = "lzw";

/// File extension of the final container.
pub const FINAL_EXTENSION: &str = "pdi";

/// File extension of a reconstructed bitmap.
pub const BITMAP_EXTENSION: &str = "bmp";

/// Options for the file-level pipeline operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Keep the intermediate `.lzw` artifact instead of deleting it.
    pub keep_intermediate: bool,
}

/// Compress bitmap bytes into a final container.
pub fn compress(bmp: &[u8]) -> Result<Vec<u8>> {
    let image = extract_pixels(bmp)?;
    let (dims, pixels) = image.into_parts();
    debug!(
        "extracted {} pixel bytes ({}x{})",
        pixels.len(),
        dims.width(),
        dims.height()
    );

    let codes = oxipix_lzw::compress(&pixels);
    let lzw_bytes = LzwContainer::new(dims, codes).to_bytes();
    debug!("lzw stage: {} container bytes", lzw_bytes.len());

    let final_bytes = oxipix_huffman::compress(&lzw_bytes)?;
    info!(
        "compressed {} -> {} bytes ({:.1}%)",
        bmp.len(),
        final_bytes.len(),
        final_bytes.len() as f64 / bmp.len() as f64 * 100.0
    );
    Ok(final_bytes)
}

/// Decompress a final container back into bitmap bytes.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let lzw_bytes = oxipix_huffman::decompress(data)?;
    debug!("huffman stage recovered {} container bytes", lzw_bytes.len());

    let container = LzwContainer::from_bytes(&lzw_bytes)?;
    let pixels = oxipix_lzw::decompress(&container.codes)?;
    debug!("lzw stage recovered {} pixel bytes", pixels.len());

    let image = PixelImage::new(container.dims, pixels)?;
    Ok(build_container(&image))
}

/// Compress a bitmap file into a final container file.
///
/// `output` defaults to the input path with the [`FINAL_EXTENSION`].
/// Returns the path of the written container.
pub fn compress_file(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    compress_file_with(input, output, PipelineOptions::default())
}

/// [`compress_file`] with explicit options.
pub fn compress_file_with(
    input: &Path,
    output: Option<&Path>,
    options: PipelineOptions,
) -> Result<PathBuf> {
    let final_path = resolve_output(input, output, FINAL_EXTENSION);

    let bmp = std::fs::read(input)?;
    let image = extract_pixels(&bmp)?;
    let (dims, pixels) = image.into_parts();

    let codes = oxipix_lzw::compress(&pixels);
    let lzw_bytes = LzwContainer::new(dims, codes).to_bytes();

    // The LZW container is a transient artifact: it exists on disk only
    // until the Huffman stage has durably produced the final container.
    let intermediate = TempArtifact::write(sibling(&final_path, input, LZW_EXTENSION), &lzw_bytes)?;
    debug!("lzw artifact at {}", intermediate.path().display());

    let final_bytes = oxipix_huffman::compress(&lzw_bytes)?;
    let part = TempArtifact::write(part_path(&final_path), &final_bytes)?;
    let written = part.persist(&final_path)?;

    if options.keep_intermediate {
        let kept = intermediate.keep();
        debug!("keeping lzw artifact at {}", kept.display());
    }

    info!(
        "compressed {} -> {} ({} -> {} bytes)",
        input.display(),
        written.display(),
        bmp.len(),
        final_bytes.len()
    );
    Ok(written)
}

/// Decompress a final container file back into a bitmap file.
///
/// `output` defaults to the input path with the [`BITMAP_EXTENSION`].
/// Returns the path of the written bitmap.
pub fn decompress_file(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    decompress_file_with(input, output, PipelineOptions::default())
}

/// [`decompress_file`] with explicit options.
pub fn decompress_file_with(
    input: &Path,
    output: Option<&Path>,
    options: PipelineOptions,
) -> Result<PathBuf> {
    let final_path = resolve_output(input, output, BITMAP_EXTENSION);

    let data = std::fs::read(input)?;
    let lzw_bytes = oxipix_huffman::decompress(&data)?;

    let intermediate = TempArtifact::write(sibling(&final_path, input, LZW_EXTENSION), &lzw_bytes)?;
    debug!("lzw artifact at {}", intermediate.path().display());

    let container = LzwContainer::from_bytes(&lzw_bytes)?;
    let pixels = oxipix_lzw::decompress(&container.codes)?;
    let image = PixelImage::new(container.dims, pixels)?;
    let bmp = build_container(&image);

    let part = TempArtifact::write(part_path(&final_path), &bmp)?;
    let written = part.persist(&final_path)?;

    if options.keep_intermediate {
        let kept = intermediate.keep();
        debug!("keeping lzw artifact at {}", kept.display());
    }

    info!(
        "decompressed {} -> {} ({} -> {} bytes)",
        input.display(),
        written.display(),
        data.len(),
        bmp.len()
    );
    Ok(written)
}

fn resolve_output(input: &Path, output: Option<&Path>, extension: &str) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension(extension),
    }
}

/// Intermediate path next to the final output, never colliding with the
/// operation's input file.
fn sibling(final_path: &Path, input: &Path, extension: &str) -> PathBuf {
    let mut path = final_path.with_extension(extension);
    if path == input {
        path = final_path.with_extension(format!("{extension}.tmp"));
    }
    path
}

fn part_path(final_path: &Path) -> PathBuf {
    let mut name = final_path.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}

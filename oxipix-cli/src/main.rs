//! OxiPix CLI - lossless bitmap compression.
//!
//! Compresses uncompressed 24-bit bitmaps through an LZW dictionary
//! stage followed by a Huffman entropy stage, and decompresses the
//! resulting containers back to byte-identical bitmaps.

mod utils;

use clap::{Parser, Subcommand};
use oxipix_bitmap::BmpHeader;
use oxipix_huffman::HuffContainer;
use oxipix_lzw::LzwContainer;
use oxipix_pipeline::PipelineOptions;
use std::path::PathBuf;
use utils::format_size;

#[derive(Parser)]
#[command(name = "oxipix")]
#[command(author, version, about = "Lossless bitmap compression - LZW + Huffman pipeline")]
#[command(long_about = "
OxiPix compresses uncompressed 24-bit bitmaps losslessly through a
two-stage pipeline: a dictionary LZW stage followed by a Huffman
entropy stage. Decompression restores the original bitmap byte for
byte.

Examples:
  oxipix compress photo.bmp
  oxipix compress photo.bmp -o archive/photo.pdi
  oxipix decompress photo.pdi
  oxipix info photo.pdi
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a 24-bit bitmap into a final container
    #[command(alias = "c")]
    Compress {
        /// Bitmap file to compress
        input: PathBuf,

        /// Output path (defaults to the input with a .pdi extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep the intermediate .lzw artifact
        #[arg(long)]
        keep_intermediate: bool,
    },

    /// Decompress a final container back into a bitmap
    #[command(alias = "d")]
    Decompress {
        /// Container file to decompress
        input: PathBuf,

        /// Output path (defaults to the input with a .bmp extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep the intermediate .lzw artifact
        #[arg(long)]
        keep_intermediate: bool,
    },

    /// Show information about a bitmap or container file
    #[command(alias = "i")]
    Info {
        /// File to inspect
        file: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            keep_intermediate,
        } => cmd_compress(&input, output.as_deref(), keep_intermediate),
        Commands::Decompress {
            input,
            output,
            keep_intermediate,
        } => cmd_decompress(&input, output.as_deref(), keep_intermediate),
        Commands::Info { file } => cmd_info(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(
    input: &std::path::Path,
    output: Option<&std::path::Path>,
    keep_intermediate: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = PipelineOptions { keep_intermediate };
    let written = oxipix_pipeline::compress_file_with(input, output, options)?;

    let in_size = std::fs::metadata(input)?.len();
    let out_size = std::fs::metadata(&written)?.len();
    println!("Compressed {} -> {}", input.display(), written.display());
    println!(
        "  {} -> {} ({:.1}%)",
        format_size(in_size),
        format_size(out_size),
        out_size as f64 / in_size as f64 * 100.0
    );
    Ok(())
}

fn cmd_decompress(
    input: &std::path::Path,
    output: Option<&std::path::Path>,
    keep_intermediate: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = PipelineOptions { keep_intermediate };
    let written = oxipix_pipeline::decompress_file_with(input, output, options)?;

    let out_size = std::fs::metadata(&written)?.len();
    println!("Decompressed {} -> {}", input.display(), written.display());
    println!("  {}", format_size(out_size));
    Ok(())
}

fn cmd_info(file: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(file)?;

    println!("File: {}", file.display());
    println!("Size: {}", format_size(data.len() as u64));

    if let Ok(header) = BmpHeader::parse(&data) {
        println!("Format: bitmap (uncompressed 24-bit)");
        println!(
            "  Dimensions: {}x{}",
            header.dims.width(),
            header.dims.height()
        );
        println!("  Pixel data offset: {}", header.pixel_data_offset);
        return Ok(());
    }

    if let Ok(container) = HuffContainer::from_bytes(&data) {
        println!("Format: final container (Huffman over LZW)");
        println!("  Code table entries: {}", container.table.len());
        println!("  Payload bits: {}", container.bit_len);
        println!(
            "  Packed payload: {}",
            format_size(container.payload.len() as u64)
        );
        return Ok(());
    }

    if let Ok(container) = LzwContainer::from_bytes(&data) {
        println!("Format: LZW container");
        println!(
            "  Dimensions: {}x{}",
            container.dims.width(),
            container.dims.height()
        );
        println!("  Codes: {}", container.codes.len());
        return Ok(());
    }

    Err("unrecognized file format".into())
}

//! LZW integration tests: codec round-trips and container handling.

use oxipix_core::{Dimensions, PixError};
use oxipix_lzw::{LzwContainer, LzwEncoder, MAX_CODES, SEED_CODES, compress, decompress};

#[test]
fn test_roundtrip_text() {
    let original = b"TOBEORNOTTOBEORTOBEORNOT";
    let codes = compress(original);
    let decoded = decompress(&codes).expect("decompression failed");
    assert_eq!(decoded, original);
}

#[test]
fn test_two_identical_pixels_reference_codes() {
    // Two identical BGR pixels: the second [10, 20] pair resolves to the
    // entry registered while encoding the first, leaving the final 30 as
    // a trailing single-byte code.
    let pixels = [10u8, 20, 30, 10, 20, 30];
    let codes = compress(&pixels);
    assert_eq!(codes, vec![10, 20, 30, 256, 30]);

    let decoded = decompress(&codes).expect("decompression failed");
    assert_eq!(decoded, pixels);
}

#[test]
fn test_roundtrip_repetitive_pixel_rows() {
    // A flat-color image row repeated many times, the common case for
    // synthetic bitmaps.
    let row = [200u8, 150, 100].repeat(64);
    let original: Vec<u8> = std::iter::repeat_with(|| row.clone())
        .take(48)
        .flatten()
        .collect();

    let codes = compress(&original);
    assert!(codes.len() * 2 < original.len() / 4);

    let decoded = decompress(&codes).expect("decompression failed");
    assert_eq!(decoded, original);
}

#[test]
fn test_roundtrip_all_byte_values_repeated() {
    let mut original = Vec::new();
    for value in 0..=255u8 {
        original.extend(std::iter::repeat_n(value, 10));
    }

    let codes = compress(&original);
    let decoded = decompress(&codes).expect("decompression failed");
    assert_eq!(decoded, original);
}

#[test]
fn test_dictionary_growth_is_bounded() {
    // Pseudo-random data registers a new entry on nearly every emitted
    // code but can never exceed the capacity bound.
    let original: Vec<u8> = (0..100_000).map(|i| ((i * 131 + 7) % 256) as u8).collect();

    let mut encoder = LzwEncoder::new();
    let codes = encoder.encode(&original);

    assert!(encoder.registered_entries() <= MAX_CODES - SEED_CODES);
    assert!(encoder.registered_entries() as usize <= codes.len());

    let decoded = decompress(&codes).expect("decompression failed");
    assert_eq!(decoded, original);
}

#[test]
fn test_container_roundtrip_through_bytes() {
    let dims = Dimensions::new(4, 2).unwrap();
    let pixels: Vec<u8> = (0..dims.pixel_len()).map(|i| (i % 13) as u8).collect();

    let container = LzwContainer::new(dims, compress(&pixels));
    let bytes = container.to_bytes();

    let parsed = LzwContainer::from_bytes(&bytes).expect("parse failed");
    assert_eq!(parsed.dims, dims);
    assert_eq!(decompress(&parsed.codes).expect("decode failed"), pixels);
}

#[test]
fn test_truncated_container_is_rejected() {
    let err = LzwContainer::from_bytes(&[1, 0, 0, 0, 1, 0]).unwrap_err();
    assert!(matches!(err, PixError::TruncatedContainer { .. }));
}

#[test]
fn test_corrupted_code_is_rejected() {
    let pixels = [10u8, 20, 30, 10, 20, 30];
    let mut codes = compress(&pixels);
    // Point at a code far beyond anything the dictionary will register.
    codes[3] = 60_000;

    let err = decompress(&codes).unwrap_err();
    assert!(matches!(err, PixError::InvalidCode { code: 60_000, .. }));
}

//! Huffman integration tests: table properties and container round-trips.

use oxipix_core::PixError;
use oxipix_huffman::{CodeTable, HuffContainer, compress, decompress, encode};

#[test]
fn test_roundtrip_various_payloads() {
    let payloads: Vec<Vec<u8>> = vec![
        b"a".to_vec(),
        b"ab".to_vec(),
        b"abracadabra".to_vec(),
        (0..=255u8).collect(),
        (0..10_000).map(|i| ((i * 37 + 11) % 256) as u8).collect(),
        b"This is a test of compression! ".repeat(10),
    ];

    for payload in payloads {
        let container = compress(&payload).expect("compression failed");
        let decoded = decompress(&container).expect("decompression failed");
        assert_eq!(decoded, payload, "mismatch for {} bytes", payload.len());
    }
}

#[test]
fn test_table_is_prefix_free() {
    let payload: Vec<u8> = (0..5_000).map(|i| ((i * i + i) % 97) as u8).collect();
    let table = CodeTable::from_payload(&payload);
    assert!(table.len() > 10);
    assert!(table.is_prefix_free());
}

#[test]
fn test_single_byte_value_payload() {
    // Uniform payload uses the single-leaf tree convention: code "0".
    // Lengths that do not fill the final byte exercise the padding path.
    for len in [1, 3, 9, 17, 255] {
        let original = vec![42u8; len];
        let container = compress(&original).expect("compression failed");
        let decoded = decompress(&container).expect("decompression failed");
        assert_eq!(decoded, original, "mismatch for length {len}");
    }
}

#[test]
fn test_tables_are_per_payload() {
    // The same byte gets a different code under a different histogram.
    let skewed = encode(b"aaaaaaaaaabc");
    assert!(skewed.table.code(b'a').unwrap().len() < skewed.table.code(b'b').unwrap().len());

    let inverse = encode(b"abbbbbbbbbbc");
    assert!(inverse.table.code(b'b').unwrap().len() < inverse.table.code(b'a').unwrap().len());
}

#[test]
fn test_truncation_below_header_is_rejected() {
    let container = compress(b"payload").unwrap();
    for cut in 0..4 {
        let err = HuffContainer::from_bytes(&container[..cut]).unwrap_err();
        assert!(
            matches!(err, PixError::TruncatedContainer { .. }),
            "cut to {cut} bytes should be truncated"
        );
    }
}

#[test]
fn test_truncated_payload_is_rejected() {
    let container = compress(&(0..200u8).collect::<Vec<_>>()).unwrap();
    let err = decompress(&container[..container.len() - 3]).unwrap_err();
    assert!(matches!(err, PixError::TruncatedContainer { .. }));
}

#[test]
fn test_decompress_never_reuses_padding() {
    // Bit-exact check: serialize, parse, decode must give the original
    // even when the payload bit count is far from a byte boundary.
    let original = vec![7u8; 13];
    let container = compress(&original).unwrap();
    let parsed = HuffContainer::from_bytes(&container).unwrap();
    assert_eq!(parsed.bit_len, 13);
    assert_eq!(decompress(&container).unwrap(), original);
}

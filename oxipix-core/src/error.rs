//! Error types for OxiPix operations.
//!
//! A single error enum covers all failure modes across the pipeline:
//! I/O errors, malformed container headers, truncated containers, and
//! undecodable LZW/Huffman codes. Every error is non-recoverable for the
//! operation that raised it; the pipeline aborts the whole compress or
//! decompress call and surfaces the error to its caller.

use std::io;
use thiserror::Error;

/// The main error type for OxiPix operations.
#[derive(Debug, Error)]
pub enum PixError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A container header is structurally invalid.
    ///
    /// Raised for bitmap headers whose declared offsets fall outside the
    /// buffer, zero or implausibly large dimensions, and code tables that
    /// fail to deserialize.
    #[error("Malformed header: {message}")]
    MalformedHeader {
        /// Description of the header defect.
        message: String,
    },

    /// A container is shorter than its header implies.
    #[error("Truncated container: need {expected} bytes, have {available}")]
    TruncatedContainer {
        /// Number of bytes the header implies.
        expected: usize,
        /// Number of bytes actually present.
        available: usize,
    },

    /// An LZW code is neither registered nor the next code to register.
    #[error("Invalid LZW code {code} (next unregistered code is {next_code})")]
    InvalidCode {
        /// The offending code.
        code: u16,
        /// The next code the dictionary would assign.
        next_code: u32,
    },

    /// Huffman bit accumulation outgrew every code in the table.
    #[error("Unknown Huffman code at bit position {bit_position}")]
    UnknownCode {
        /// Bit position where the accumulation ran past the longest code.
        bit_position: u64,
    },
}

/// Result type alias for OxiPix operations.
pub type Result<T> = std::result::Result<T, PixError>;

impl PixError {
    /// Create a malformed header error.
    pub fn malformed_header(message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            message: message.into(),
        }
    }

    /// Create a truncated container error.
    pub fn truncated(expected: usize, available: usize) -> Self {
        Self::TruncatedContainer {
            expected,
            available,
        }
    }

    /// Create an invalid LZW code error.
    pub fn invalid_code(code: u16, next_code: u32) -> Self {
        Self::InvalidCode { code, next_code }
    }

    /// Create an unknown Huffman code error.
    pub fn unknown_code(bit_position: u64) -> Self {
        Self::UnknownCode { bit_position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PixError::malformed_header("width is zero");
        assert!(err.to_string().contains("width is zero"));

        let err = PixError::truncated(8, 3);
        assert!(err.to_string().contains("need 8 bytes"));

        let err = PixError::invalid_code(300, 258);
        assert!(err.to_string().contains("300"));

        let err = PixError::unknown_code(17);
        assert!(err.to_string().contains("bit position 17"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: PixError = io_err.into();
        assert!(matches!(err, PixError::Io(_)));
    }
}

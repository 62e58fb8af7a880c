//! LZW dictionary (code table) management.

use std::collections::HashMap;

/// Total dictionary capacity, including the 256 seeded entries.
///
/// Codes are 16 bits wide, so the table can never address more than
/// 65536 entries. A full dictionary is a capacity bound, not an error:
/// registration stops but lookups continue.
pub const MAX_CODES: u32 = 65_536;

/// Number of seeded single-byte entries.
pub const SEED_CODES: u32 = 256;

/// Bidirectional LZW dictionary.
///
/// Maps byte strings to numeric codes and back. Both directions are
/// seeded with the 256 single-byte strings at codes 0-255; growth is
/// monotonic and capped at [`MAX_CODES`]. An encoder and a decoder that
/// replay the same seeding and growth rule assign identical codes.
#[derive(Debug)]
pub struct LzwDictionary {
    /// Code table: code -> byte string.
    table: Vec<Vec<u8>>,
    /// Reverse lookup: byte string -> code (used when encoding).
    reverse: HashMap<Vec<u8>, u16>,
    /// Next available code.
    next_code: u32,
}

impl LzwDictionary {
    /// Create a dictionary seeded with the single-byte entries.
    pub fn new() -> Self {
        let mut dict = Self {
            table: Vec::with_capacity(SEED_CODES as usize),
            reverse: HashMap::new(),
            next_code: 0,
        };
        dict.reset();
        dict
    }

    /// Reset the dictionary to its seeded state.
    pub fn reset(&mut self) {
        self.table.clear();
        self.reverse.clear();
        for i in 0..SEED_CODES {
            let string = vec![i as u8];
            self.table.push(string.clone());
            self.reverse.insert(string, i as u16);
        }
        self.next_code = SEED_CODES;
    }

    /// Register a new string in both directions (encoding path).
    ///
    /// Returns the assigned code, or `None` once the table is full.
    pub fn add_string(&mut self, string: Vec<u8>) -> Option<u16> {
        if self.next_code >= MAX_CODES {
            return None;
        }
        let code = self.next_code as u16;
        self.table.push(string.clone());
        self.reverse.insert(string, code);
        self.next_code += 1;
        Some(code)
    }

    /// Register a new string in the code table only (decoding path).
    ///
    /// The reverse map is not needed when decoding, so it is skipped.
    pub fn add_string_decode(&mut self, string: Vec<u8>) -> Option<u16> {
        if self.next_code >= MAX_CODES {
            return None;
        }
        let code = self.next_code as u16;
        self.table.push(string);
        self.next_code += 1;
        Some(code)
    }

    /// Look up the byte string for a code.
    pub fn get_string(&self, code: u16) -> Option<&[u8]> {
        self.table.get(code as usize).map(|v| v.as_slice())
    }

    /// Look up the code for a byte string (encoding path).
    pub fn find_code(&self, string: &[u8]) -> Option<u16> {
        self.reverse.get(string).copied()
    }

    /// Whether the dictionary has reached its capacity bound.
    pub fn is_full(&self) -> bool {
        self.next_code >= MAX_CODES
    }

    /// The next code that will be assigned.
    pub fn next_code(&self) -> u32 {
        self.next_code
    }
}

impl Default for LzwDictionary {
    fn default() -> Self {
        Self::new()
    }
}

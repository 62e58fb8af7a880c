//! LZW encoder (compression).

use crate::dictionary::LzwDictionary;

/// LZW encoder for compression.
#[derive(Debug, Default)]
pub struct LzwEncoder {
    /// Dictionary for string lookup.
    dict: LzwDictionary,
}

impl LzwEncoder {
    /// Create a new LZW encoder with a freshly seeded dictionary.
    pub fn new() -> Self {
        Self {
            dict: LzwDictionary::new(),
        }
    }

    /// Encode data into a sequence of 16-bit codes.
    ///
    /// Greedy longest-match: the current word is extended while the
    /// extension is a registered string; on a miss the current word's
    /// code is emitted, the extension is registered (while the table has
    /// room), and matching restarts at the byte that caused the miss.
    /// The final non-empty word is emitted after the input is exhausted.
    /// Encoding never fails; a full dictionary keeps encoding with the
    /// entries it already has.
    pub fn encode(&mut self, input: &[u8]) -> Vec<u16> {
        let mut codes = Vec::new();
        let mut current: Vec<u8> = Vec::new();

        for &byte in input {
            let mut candidate = current.clone();
            candidate.push(byte);

            if self.dict.find_code(&candidate).is_some() {
                current = candidate;
            } else {
                let code = self.dict.find_code(&current).expect(
                    "BUG: current word must be registered - it is either empty-extended from a single byte or was found in a previous iteration",
                );
                codes.push(code);

                let _ = self.dict.add_string(candidate);

                current.clear();
                current.push(byte);
            }
        }

        if !current.is_empty() {
            let code = self
                .dict
                .find_code(&current)
                .expect("BUG: final word must be registered");
            codes.push(code);
        }

        codes
    }

    /// Reset the encoder to its initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
    }

    /// Number of codes registered beyond the seeded entries.
    pub fn registered_entries(&self) -> u32 {
        self.dict.next_code() - crate::dictionary::SEED_CODES
    }
}

//! LZW decoder (decompression).

use crate::dictionary::LzwDictionary;
use oxipix_core::error::{PixError, Result};

/// LZW decoder for decompression.
#[derive(Debug, Default)]
pub struct LzwDecoder {
    /// Dictionary for code lookup.
    dict: LzwDictionary,
}

impl LzwDecoder {
    /// Create a new LZW decoder with a freshly seeded dictionary.
    pub fn new() -> Self {
        Self {
            dict: LzwDictionary::new(),
        }
    }

    /// Decode a sequence of 16-bit codes back into bytes.
    ///
    /// Replays the encoder's registration rule one step behind: after
    /// each decoded entry, previous-word + first byte of the entry is
    /// registered. A code equal to the next unassigned code is the
    /// standard not-yet-registered case (the encoder emitted the code it
    /// was about to create); anything beyond that is corruption and
    /// fails with [`PixError::InvalidCode`].
    pub fn decode(&mut self, codes: &[u16]) -> Result<Vec<u8>> {
        let Some((&first, rest)) = codes.split_first() else {
            return Ok(Vec::new());
        };

        let mut current = self
            .dict
            .get_string(first)
            .ok_or_else(|| PixError::invalid_code(first, self.dict.next_code()))?
            .to_vec();
        let mut output = current.clone();

        for &code in rest {
            let entry = if let Some(string) = self.dict.get_string(code) {
                string.to_vec()
            } else if u32::from(code) == self.dict.next_code() {
                // The encoder emitted the code it was about to register:
                // the entry is the previous word plus its own first byte.
                let mut entry = current.clone();
                entry.push(current[0]);
                entry
            } else {
                return Err(PixError::invalid_code(code, self.dict.next_code()));
            };

            output.extend_from_slice(&entry);

            let mut new_entry = current;
            new_entry.push(entry[0]);
            let _ = self.dict.add_string_decode(new_entry);

            current = entry;
        }

        Ok(output)
    }

    /// Reset the decoder to its initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
    }
}

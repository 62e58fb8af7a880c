//! The byte-to-code table derived from a Huffman tree.

use crate::tree::{Node, build_tree, histogram};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A prefix-free mapping from byte values to bit-string codes.
///
/// Built from the frequency histogram of one payload and valid only for
/// that payload; a table is never reused. Codes are stored as strings of
/// `'0'`/`'1'`, which is also their serialized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTable {
    codes: BTreeMap<u8, String>,
}

impl CodeTable {
    /// Build the code table for a payload.
    ///
    /// The tree is walked depth-first assigning `0` to left edges and
    /// `1` to right edges; a leaf's accumulated path is its code. A
    /// payload with a single distinct byte value yields a single-leaf
    /// tree whose code is `"0"`, so no code is ever empty. An empty
    /// payload yields an empty table.
    pub fn from_payload(payload: &[u8]) -> Self {
        let mut codes = BTreeMap::new();
        if let Some(tree) = build_tree(&histogram(payload)) {
            match tree {
                Node::Leaf { value } => {
                    codes.insert(value, "0".to_string());
                }
                _ => assign(&tree, String::new(), &mut codes),
            }
        }
        Self { codes }
    }

    /// The code for a byte value, if the byte occurred in the payload.
    pub fn code(&self, byte: u8) -> Option<&str> {
        self.codes.get(&byte).map(String::as_str)
    }

    /// Number of distinct byte values in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table is empty (built from an empty payload).
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Length in bits of the longest code.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(String::len).max().unwrap_or(0)
    }

    /// Invert the table for decoding: code -> byte.
    pub fn inverted(&self) -> HashMap<String, u8> {
        self.codes
            .iter()
            .map(|(&byte, code)| (code.clone(), byte))
            .collect()
    }

    /// Whether no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        self.codes.values().all(|a| {
            self.codes
                .values()
                .all(|b| a == b || !b.starts_with(a.as_str()))
        })
    }

    /// Iterate over (byte, code) pairs in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.codes.iter().map(|(&byte, code)| (byte, code.as_str()))
    }
}

fn assign(node: &Node, prefix: String, codes: &mut BTreeMap<u8, String>) {
    match node {
        Node::Leaf { value } => {
            codes.insert(*value, prefix);
        }
        Node::Internal { left, right } => {
            assign(left, format!("{prefix}0"), codes);
            assign(right, format!("{prefix}1"), codes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload() {
        let table = CodeTable::from_payload(&[]);
        assert!(table.is_empty());
        assert_eq!(table.max_code_len(), 0);
    }

    #[test]
    fn test_single_value_payload() {
        let table = CodeTable::from_payload(&[9, 9, 9, 9]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.code(9), Some("0"));
    }

    #[test]
    fn test_prefix_free() {
        let payload: Vec<u8> = (0..640).map(|i| ((i * i + 3) % 40) as u8).collect();
        let table = CodeTable::from_payload(&payload);
        assert!(table.len() > 2);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_frequent_byte_gets_short_code() {
        let mut payload = vec![1u8; 200];
        payload.extend([2u8; 20]);
        payload.extend([3u8; 2]);

        let table = CodeTable::from_payload(&payload);
        assert!(table.code(1).unwrap().len() <= table.code(3).unwrap().len());
    }

    #[test]
    fn test_inversion() {
        let table = CodeTable::from_payload(b"abracadabra");
        let inverted = table.inverted();
        assert_eq!(inverted.len(), table.len());
        for (byte, code) in table.iter() {
            assert_eq!(inverted.get(code), Some(&byte));
        }
    }

    #[test]
    fn test_json_shape() {
        let table = CodeTable::from_payload(&[5, 5, 5]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"5":"0"}"#);

        let parsed: CodeTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }
}

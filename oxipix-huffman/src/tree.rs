//! Huffman tree construction from a byte-frequency histogram.

/// A node of the Huffman tree.
#[derive(Debug)]
pub enum Node {
    /// A byte value at a leaf.
    Leaf {
        /// The byte this leaf encodes.
        value: u8,
    },
    /// An internal node joining two subtrees.
    Internal {
        /// Subtree reached by a `0` bit.
        left: Box<Node>,
        /// Subtree reached by a `1` bit.
        right: Box<Node>,
    },
}

/// A tree node paired with its cumulative frequency during construction.
#[derive(Debug)]
struct Weighted {
    freq: u64,
    node: Node,
}

/// Count byte occurrences over the exact payload.
pub fn histogram(payload: &[u8]) -> [u64; 256] {
    let mut counts = [0u64; 256];
    for &byte in payload {
        counts[byte as usize] += 1;
    }
    counts
}

/// Build a Huffman tree from a histogram.
///
/// Leaves are created in ascending byte-value order, then the two
/// lowest-frequency nodes are merged repeatedly until one root remains.
/// Selection uses a stable sort, so ties keep their current sequence
/// order: earlier-created nodes merge before later ones. The rule is
/// fixed; encode and decode of the same payload always agree on the
/// resulting tree.
///
/// Returns `None` for an empty histogram.
pub fn build_tree(counts: &[u64; 256]) -> Option<Node> {
    let mut nodes: Vec<Weighted> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &freq)| freq > 0)
        .map(|(value, &freq)| Weighted {
            freq,
            node: Node::Leaf { value: value as u8 },
        })
        .collect();

    if nodes.is_empty() {
        return None;
    }

    while nodes.len() > 1 {
        nodes.sort_by_key(|w| w.freq);
        let left = nodes.remove(0);
        let right = nodes.remove(0);
        nodes.push(Weighted {
            freq: left.freq + right.freq,
            node: Node::Internal {
                left: Box::new(left.node),
                right: Box::new(right.node),
            },
        });
    }

    nodes.pop().map(|w| w.node)
}

//! Node implementation for the path trie.
//!
//! Nodes are the building blocks of the trie: each one represents a single
//! path-segment level and owns its children outright. The structure is a
//! strict tree, so plain ownership suffices — no reference counting and no
//! per-node locking.

use fnv::FnvHashMap;

/// A node in the path trie.
///
/// Each outgoing edge is labeled by one normalized path segment. A node may
/// be an interior node (it has children) and a terminal node (an inserted
/// path ends exactly here) at the same time; the two facts are independent.
#[derive(Debug)]
pub(crate) struct TrieNode {
    /// Map of segment names to child nodes.
    pub(crate) children: FnvHashMap<String, TrieNode>,

    /// Whether some inserted path ends exactly at this node.
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub(crate) fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            is_terminal: false,
        }
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}

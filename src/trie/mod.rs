// Copyright (c) 2026 Path Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Path trie implementation.
//!
//! [`PathTrie`] stores a set of path strings compactly by their shared
//! segment prefixes and answers containment and prefix queries against that
//! set. Typical use is indexing a collection of folders and then testing
//! whether a candidate folder is, or is inside, one of them.
//!
//! # Features
//!
//! - Exact-match, prefix-match, and combined membership queries
//! - Uniform separator normalization for Unix and Windows style paths
//! - Opaque special-token paths (`$home$`) that are never decomposed
//! - Total operations: any string is a valid input, nothing ever fails
//!
//! # Example
//!
//! ```
//! use path_trie::PathTrie;
//!
//! let mut trie = PathTrie::new();
//! trie.insert("/var/data/indexed");
//! trie.insert("$home$");
//!
//! // Exact membership requires the full inserted path.
//! assert!(trie.contains("var/data/indexed"));
//! assert!(!trie.contains("var/data"));
//!
//! // Prefix membership also accepts ancestors of inserted paths.
//! assert!(trie.has_prefix("var/data"));
//!
//! // Both answers in one call, over two possibly different paths.
//! let check = trie.check_prefix_and_exact_match("var", "$home$");
//! assert!(check.starts_with);
//! assert!(check.exact_match);
//!
//! // Recycle the index for a fresh pass.
//! trie.clear();
//! assert!(trie.is_empty());
//! ```

mod config;
mod node;
mod segment;

#[cfg(test)]
mod tests;

use tracing::trace;

pub use config::PathTrieConfig;
use node::TrieNode;

/// Result of [`PathTrie::check_prefix_and_exact_match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixCheck {
    /// Whether the queried prefix path is an inserted path or an ancestor
    /// of one.
    pub starts_with: bool,

    /// Whether the queried exact path was inserted in full.
    pub exact_match: bool,
}

/// An in-memory path-membership index.
///
/// Paths grow the trie only via [`insert`](Self::insert); individual paths
/// cannot be removed, but [`clear`](Self::clear) resets the whole index.
/// Queries never mutate, so concurrent read-only access is safe; mutation
/// requires exclusive access, which the `&mut self` receivers enforce.
#[derive(Debug)]
pub struct PathTrie {
    /// The root node, representing the empty path. Always present.
    root: TrieNode,

    /// Configuration options.
    config: PathTrieConfig,

    /// Number of distinct inserted paths (terminal nodes).
    len: usize,
}

impl PathTrie {
    /// Creates a new empty `PathTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(PathTrieConfig::default())
    }

    /// Creates a new empty `PathTrie` with the specified configuration.
    pub fn with_config(config: PathTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            config,
            len: 0,
        }
    }

    /// Inserts a path into the trie.
    ///
    /// The path is segmented and normalized first, so `"a/b"`, `"/a//b/"`,
    /// and `"\a\b\"` all record the same entry. Inserting a path that is
    /// already present leaves the trie logically unchanged.
    ///
    /// Returns `true` if the path was newly inserted, `false` if it was
    /// already present. A path that segments to the empty sequence marks
    /// the root itself as inserted.
    pub fn insert<P: AsRef<str>>(&mut self, path: P) -> bool {
        let path = path.as_ref();
        let segments = segment::split_path(path, self.config.marker());

        let mut node = &mut self.root;
        for seg in segments {
            node = node.children.entry(seg).or_insert_with(TrieNode::new);
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;

        if is_new {
            self.len += 1;
            trace!(path, len = self.len, "inserted path");
        }

        is_new
    }

    /// Checks whether this exact path was inserted.
    ///
    /// Returns `false` if the path is unknown, and also if it is merely an
    /// ancestor of something inserted; use [`has_prefix`](Self::has_prefix)
    /// for the latter question.
    pub fn contains<P: AsRef<str>>(&self, path: P) -> bool {
        let segments = segment::split_path(path.as_ref(), self.config.marker());
        self.walk(&segments).is_some_and(|node| node.is_terminal)
    }

    /// Checks whether any inserted path has this path as a prefix.
    ///
    /// True if the path is itself inserted or is an ancestor directory of
    /// something inserted. A path that segments to the empty sequence
    /// addresses the root and is trivially true, even on an empty trie.
    pub fn has_prefix<P: AsRef<str>>(&self, path: P) -> bool {
        let segments = segment::split_path(path.as_ref(), self.config.marker());
        self.walk(&segments).is_some()
    }

    /// Runs [`has_prefix`](Self::has_prefix) on `prefix` and
    /// [`contains`](Self::contains) on `exact`, returning both answers.
    ///
    /// Pure composition over two possibly different paths; no shared
    /// traversal is attempted.
    pub fn check_prefix_and_exact_match<P, Q>(&self, prefix: P, exact: Q) -> PrefixCheck
    where
        P: AsRef<str>,
        Q: AsRef<str>,
    {
        PrefixCheck {
            starts_with: self.has_prefix(prefix),
            exact_match: self.contains(exact),
        }
    }

    /// Returns every inserted path at or below the given prefix, in
    /// normalized form (segments joined with `/`).
    ///
    /// The empty prefix enumerates the whole index. Order is unspecified.
    /// An inserted root is reported as the empty string.
    pub fn paths_with_prefix<P: AsRef<str>>(&self, prefix: P) -> Vec<String> {
        let segments = segment::split_path(prefix.as_ref(), self.config.marker());

        let mut paths = Vec::new();
        if let Some(node) = self.walk(&segments) {
            collect_paths(node, &segments.join("/"), &mut paths);
        }
        paths
    }

    /// Returns the number of distinct inserted paths.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the trie holds no inserted paths.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Discards the entire tree and reinitializes to a single empty root.
    ///
    /// Irreversible. Used to recycle the index for a new indexing pass
    /// without constructing a new instance.
    pub fn clear(&mut self) {
        trace!(discarded = self.len, "cleared path trie");
        self.root = TrieNode::new();
        self.len = 0;
    }

    /// Follows one child edge per segment from the root.
    ///
    /// Shared traversal for the query operations: `None` as soon as a
    /// segment has no matching edge, otherwise the node reached after
    /// consuming every segment.
    fn walk(&self, segments: &[String]) -> Option<&TrieNode> {
        let mut node = &self.root;
        for seg in segments {
            node = node.children.get(seg.as_str())?;
        }
        Some(node)
    }
}

impl Default for PathTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulates the normalized form of every inserted path in this subtree.
fn collect_paths(node: &TrieNode, current: &str, paths: &mut Vec<String>) {
    if node.is_terminal {
        paths.push(current.to_string());
    }

    for (seg, child) in &node.children {
        let child_path = if current.is_empty() {
            seg.clone()
        } else {
            format!("{current}/{seg}")
        };
        collect_paths(child, &child_path, paths);
    }
}

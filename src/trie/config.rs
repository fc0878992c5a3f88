// Copyright (c) 2026 Path Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Configuration for the path trie.

/// Configuration for a [`PathTrie`](crate::PathTrie).
///
/// The only tunable today is the special-token marker: a path that both
/// starts and ends with this character is treated as one opaque segment and
/// never decomposed, which lets callers index symbolic placeholder paths
/// (for example `$home$`) alongside ordinary ones.
#[derive(Debug, Clone)]
pub struct PathTrieConfig {
    /// Sentinel delimiter for special-token passthrough.
    marker: char,
}

impl PathTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - marker: `'$'`
    pub fn new() -> Self {
        Self { marker: '$' }
    }

    /// Set the sentinel marker character for special-token paths.
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// The sentinel marker character.
    pub fn marker(&self) -> char {
        self.marker
    }
}

impl Default for PathTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

// Copyright (c) 2026 Path Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Path Trie Library
//!
//! An in-memory path-membership index. Paths are decomposed into normalized
//! segments and stored in a prefix tree, so the index can answer two
//! questions efficiently: "was this exact path inserted?" and "is this path
//! an inserted path, or an ancestor directory of one?".
//!
//! The trie never touches a real filesystem; it only indexes the strings it
//! is given. Separator conventions are normalized on the way in, so Unix
//! and Windows style paths that name the same location index identically.
//!
//! # Design
//!
//! - Owned tree of nodes, no shared ownership and no interior locking.
//!   Mutation takes `&mut self`; callers needing concurrent access wrap the
//!   trie in their own synchronization.
//! - Every operation is total over all string inputs. There is no error
//!   type: malformed separators are absorbed by normalization, and the
//!   empty path addresses the root.
//! - No hidden process-wide instance; a [`PathTrie`] is always an
//!   explicitly constructed, caller-owned value.
//!
//! # Example
//!
//! ```
//! use path_trie::PathTrie;
//!
//! let mut trie = PathTrie::new();
//! trie.insert("projects/alpha/src");
//!
//! assert!(trie.contains("projects/alpha/src"));
//! assert!(!trie.contains("projects/alpha"));
//! assert!(trie.has_prefix("projects/alpha"));
//!
//! // Separator style does not matter.
//! assert!(trie.contains("\\projects\\alpha\\src\\"));
//! ```

pub mod trie;

pub use trie::{PathTrie, PathTrieConfig, PrefixCheck};

/// Version information for the Path Trie library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Copyright (c) 2026 Path Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Path normalization and segmentation.
//!
//! Every trie operation funnels its input through [`split_path`], so insert
//! and the query forms always agree on how a path decomposes. The rules:
//!
//! 1. A path that both starts and ends with the marker character is one
//!    opaque segment, taken verbatim (placeholder paths like `$home$` are
//!    never split, even if they contain separators).
//! 2. Otherwise backslashes are treated as forward slashes, separator runs
//!    collapse, and leading/trailing separators are absorbed.
//! 3. A path that normalizes to nothing segments to the empty sequence,
//!    which addresses the trie root.
//!
//! `"/a//b/"`, `"a/b"`, and `"\a\b\"` all segment to `["a", "b"]`.

/// Splits a path string into its normalized segment sequence.
///
/// Total over all inputs; never yields an empty-string segment.
pub(crate) fn split_path(path: &str, marker: char) -> Vec<String> {
    // Special-token passthrough: the entire string is wrapped by the
    // marker, so it is a single atomic segment. A one-character string
    // equal to the marker satisfies both conditions.
    if path.starts_with(marker) && path.ends_with(marker) {
        return vec![path.to_string()];
    }

    // Splitting on '/' and keeping only non-empty pieces collapses
    // separator runs and strips leading/trailing separators in one pass.
    path.replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

// Copyright (c) 2026 Path Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Property-based tests for the path trie.

use proptest::prelude::*;

use crate::trie::PathTrie;

// Strategy for a single path segment (no separators, no marker).
fn segment_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_.\\-]{1,12}").unwrap()
}

// Strategy for a non-empty segment sequence of moderate depth.
fn segments_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..6)
}

// Renders a segment sequence with deliberately messy separators.
fn messy_variants(segments: &[String]) -> Vec<String> {
    vec![
        segments.join("/"),
        format!("/{}/", segments.join("/")),
        segments.join("\\"),
        format!("\\{}\\", segments.join("\\")),
        segments.join("//"),
    ]
}

proptest! {
    // Property: a path is contained immediately after inserting it, in any
    // separator rendering.
    #[test]
    fn prop_insert_then_contains(segments in segments_strategy()) {
        let mut trie = PathTrie::new();
        trie.insert(segments.join("/"));

        for variant in messy_variants(&segments) {
            prop_assert!(trie.contains(&variant));
            prop_assert!(trie.has_prefix(&variant));
        }
    }

    // Property: every proper ancestor of an inserted path is a prefix match
    // but not an exact match.
    #[test]
    fn prop_ancestors_are_prefixes_not_members(segments in segments_strategy()) {
        let mut trie = PathTrie::new();
        trie.insert(segments.join("/"));

        for depth in 0..segments.len() {
            let ancestor = segments[..depth].join("/");
            prop_assert!(trie.has_prefix(&ancestor));
            prop_assert!(!trie.contains(&ancestor));
        }
    }

    // Property: reinsertion changes nothing observable.
    #[test]
    fn prop_insert_is_idempotent(segments in segments_strategy()) {
        let mut trie = PathTrie::new();
        let path = segments.join("/");

        prop_assert!(trie.insert(&path));
        let len_once = trie.len();

        prop_assert!(!trie.insert(&path));
        prop_assert_eq!(trie.len(), len_once);
        prop_assert!(trie.contains(&path));
    }

    // Property: the combined check is exactly the pair of individual
    // queries, for any two paths.
    #[test]
    fn prop_combined_check_matches_individual_queries(
        inserted in prop::collection::vec(segments_strategy(), 0..5),
        prefix in segments_strategy(),
        exact in segments_strategy(),
    ) {
        let mut trie = PathTrie::new();
        for segments in &inserted {
            trie.insert(segments.join("/"));
        }

        let (prefix, exact) = (prefix.join("/"), exact.join("/"));
        let check = trie.check_prefix_and_exact_match(&prefix, &exact);
        prop_assert_eq!(check.starts_with, trie.has_prefix(&prefix));
        prop_assert_eq!(check.exact_match, trie.contains(&exact));
    }

    // Property: a path never queried as inserted is not contained, and is a
    // prefix only if it leads toward an inserted path.
    #[test]
    fn prop_unrelated_path_is_absent(
        segments in segments_strategy(),
        foreign in segment_strategy(),
    ) {
        let mut trie = PathTrie::new();
        trie.insert(segments.join("/"));

        // Appending a segment never used keeps the path outside the tree.
        let outside = format!("{}/{}_x", segments.join("/"), foreign);
        prop_assert!(!trie.contains(&outside));
        prop_assert!(!trie.has_prefix(&outside));
    }

    // Property: clear erases every inserted path and resets the count; the
    // degenerate root prefix keeps holding.
    #[test]
    fn prop_clear_erases_everything(paths in prop::collection::vec(segments_strategy(), 1..8)) {
        let mut trie = PathTrie::new();
        for segments in &paths {
            trie.insert(segments.join("/"));
        }
        prop_assert!(!trie.is_empty());

        trie.clear();

        prop_assert!(trie.is_empty());
        prop_assert_eq!(trie.len(), 0);
        for segments in &paths {
            let path = segments.join("/");
            prop_assert!(!trie.contains(&path));
            prop_assert!(!trie.has_prefix(&path));
        }
        prop_assert!(trie.has_prefix(""));
    }

    // Property: enumeration returns exactly the set of inserted paths in
    // normalized form.
    #[test]
    fn prop_enumeration_roundtrips_inserted_set(
        paths in prop::collection::vec(segments_strategy(), 1..8),
    ) {
        let mut trie = PathTrie::new();
        let mut expected: Vec<String> = paths.iter().map(|s| s.join("/")).collect();
        expected.sort();
        expected.dedup();

        for path in &expected {
            trie.insert(path);
        }
        prop_assert_eq!(trie.len(), expected.len());

        let mut listed = trie.paths_with_prefix("");
        listed.sort();
        prop_assert_eq!(listed, expected);
    }
}

// Copyright (c) 2026 Path Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Unit and property-based tests for the path trie.

mod property_tests;

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Text matching helpers.

/// Return true when `needle` occurs in `haystack`, comparing lowercased forms.
///
/// Lowercasing is Unicode-aware, so `"ÉCOLE"` contains `"école"`. An empty
/// needle is contained in every haystack.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

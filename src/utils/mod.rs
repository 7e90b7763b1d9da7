// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by UI and business logic.

pub mod paths;
pub mod text;

/// Resolve a possibly relative path against a base directory.
pub use paths::resolve_relative;
/// Unicode-aware case-insensitive substring test.
pub use text::contains_ignore_case;

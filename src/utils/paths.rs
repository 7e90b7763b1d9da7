// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Path helpers for catalog-relative files.

use std::path::{Path, PathBuf};

/// Join `path` onto `base` unless it is already absolute.
pub fn resolve_relative(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_paths() {
        assert_eq!(
            resolve_relative(Path::new("/shop"), Path::new("covers/a.png")),
            PathBuf::from("/shop/covers/a.png")
        );
    }

    #[test]
    fn keeps_absolute_paths() {
        assert_eq!(
            resolve_relative(Path::new("/shop"), Path::new("/tmp/a.png")),
            PathBuf::from("/tmp/a.png")
        );
    }
}

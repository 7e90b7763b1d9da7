// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Load a JSON catalog from disk.

use std::path::Path;

use anyhow::{Context, Result};

use crate::models::book::{Catalog, parse_catalog};

/// Read and parse a catalog file; relative cover paths resolve against the file's directory.
///
/// # Errors
///
/// Returns an error naming `path` when the file cannot be read or parsed.
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let catalog = parse_catalog(&content, base_dir)
        .with_context(|| format!("Invalid catalog file: {}", path.display()))?;
    log::info!(
        "Loaded {} book(s) from {}",
        catalog.books().len(),
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn loads_catalog_relative_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.json");
        fs::write(
            &path,
            r#"{ "books": [ { "title": "Dune", "author": "Herbert", "cost": "$9", "image_path": "dune.png" } ] }"#,
        )
        .unwrap();

        let catalog = load_catalog_file(&path).expect("catalog loads");

        assert_eq!(catalog.books().len(), 1);
        assert_eq!(
            catalog.books()[0].image_path.as_deref(),
            Some(tmp.path().join("dune.png").as_path())
        );
    }

    #[test]
    fn missing_file_error_names_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.json");

        let err = load_catalog_file(&path).unwrap_err();

        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn invalid_content_keeps_parse_cause() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, r#"{ "books": [ { "title": "", "cost": 1 } ] }"#).unwrap();

        let err = load_catalog_file(&path).unwrap_err();

        assert!(err.to_string().contains("bad.json"));
        assert!(format!("{err:#}").contains("empty title"));
    }
}

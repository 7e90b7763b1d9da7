// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

/// Startup options for the book store window.
#[derive(Debug, Clone, Parser)]
#[command(name = "bookstore")]
#[command(version)]
#[command(about = "Browse a book catalog, fill a cart, and search titles", long_about = None)]
pub struct AppConfig {
    /// JSON catalog to show instead of the built-in books
    #[arg(long, env = "BOOKSTORE_CATALOG", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Initial window width in points
    #[arg(long, default_value_t = 800.0, value_parser = parse_window_extent)]
    pub window_width: f32,

    /// Initial window height in points
    #[arg(long, default_value_t = 600.0, value_parser = parse_window_extent)]
    pub window_height: f32,
}

/// Accept only finite, positive window dimensions.
fn parse_window_extent(raw: &str) -> Result<f32, String> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{raw:?} is not a number"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("window size must be a positive finite number, got {raw:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_size_defaults() {
        let config = AppConfig::try_parse_from(["bookstore", "--window-width", "1024"]).unwrap();

        assert_eq!(config.window_width, 1024.0);
        assert_eq!(config.window_height, 600.0);
    }

    #[test]
    fn catalog_flag_takes_a_path() {
        let config =
            AppConfig::try_parse_from(["bookstore", "--catalog", "/srv/books.json"]).unwrap();

        assert_eq!(config.catalog, Some(PathBuf::from("/srv/books.json")));
    }

    #[test]
    fn rejects_non_numeric_window_size() {
        assert!(AppConfig::try_parse_from(["bookstore", "--window-height", "tall"]).is_err());
    }

    #[test]
    fn rejects_degenerate_window_sizes() {
        for bad in ["NaN", "inf", "-inf", "0", "-640"] {
            assert!(
                AppConfig::try_parse_from(["bookstore", "--window-width", bad]).is_err(),
                "{bad} should be rejected"
            );
        }
        assert!(parse_window_extent("1280").is_ok_and(|w| w == 1280.0));
    }
}

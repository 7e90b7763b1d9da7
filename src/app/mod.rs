// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the book store UI.

pub mod config;

use eframe::egui;
use egui_phosphor::Variant;

use crate::logic::catalog_loader::load_catalog_file;
use crate::mvu::AppModel;
use crate::ui::BookStoreApp;
use crate::ui::components::catalog::CatalogModel;

pub use config::AppConfig;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run(config: AppConfig) -> eframe::Result<()> {
    log::info!("Starting book store v{}", env!("CARGO_PKG_VERSION"));

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Book Store catalog")
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    let model = initial_model(&config);

    eframe::run_native(
        "Book Store catalog",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(BookStoreApp::new(model)))
        }),
    )
}

/// Build the starting model, loading the configured catalog when one is given.
///
/// A catalog that fails to load leaves the built-in books in place and
/// opens the error modal on the first frame.
fn initial_model(config: &AppConfig) -> AppModel {
    let mut model = AppModel::default();
    let Some(path) = &config.catalog else {
        log::info!("Using built-in catalog");
        return model;
    };

    match load_catalog_file(path) {
        Ok(catalog) => {
            model.catalog = CatalogModel::new(catalog, Some(path.clone()));
        }
        Err(err) => {
            log::warn!("Falling back to built-in catalog: {err:#}");
            let message = format!("Failed to load catalog:\n\n{err:#}");
            model.error = Some(message.clone());
            model.status = Some(message);
        }
    }
    model
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn initial_model_defaults_to_builtin_catalog() {
        let config = AppConfig::try_parse_from(["bookstore"]).unwrap();

        let model = initial_model(&config);

        assert_eq!(model.catalog.catalog().books().len(), 5);
        assert!(model.catalog.source().is_none());
        assert!(model.error.is_none());
    }

    #[test]
    fn initial_model_loads_configured_catalog() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("shop.json");
        fs::write(
            &path,
            r#"{ "books": [ { "title": "Emma", "author": "Austen", "cost": 8 } ] }"#,
        )
        .unwrap();
        let config =
            AppConfig::try_parse_from(["bookstore", "--catalog", path.to_str().unwrap()]).unwrap();

        let model = initial_model(&config);

        assert_eq!(model.catalog.catalog().books()[0].title, "Emma");
        assert_eq!(model.catalog.source(), Some(&path));
    }

    #[test]
    fn initial_model_falls_back_when_catalog_is_broken() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.json");
        let config =
            AppConfig::try_parse_from(["bookstore", "--catalog", path.to_str().unwrap()]).unwrap();

        let model = initial_model(&config);

        assert_eq!(model.catalog.catalog().books().len(), 5);
        assert!(model.error.as_deref().is_some_and(|e| e.contains("missing.json")));
    }
}

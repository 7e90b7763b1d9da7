// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Catalog tab: book rows with covers and "Add to Cart" buttons, MVU style.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::logic::covers::COVER_SIZE;
use crate::models::book::Catalog;

/// Cover cache key: the book's image path, or `None` for the shared placeholder.
pub type CoverKey = Option<PathBuf>;

/// UI state for the catalog tab.
pub struct CatalogModel {
    catalog: Catalog,
    source: Option<PathBuf>,
    covers: HashMap<CoverKey, egui::TextureHandle>,
    requested: HashSet<CoverKey>,
}

impl Default for CatalogModel {
    fn default() -> Self {
        Self::new(Catalog::builtin(), None)
    }
}

/// Messages emitted by the catalog view.
// Debug omitted because TextureHandle is not Debug.
pub enum CatalogMsg {
    /// Handled by the root update, which owns the cart.
    AddToCart(usize),
    RequestCover(CoverKey),
    CoverReady {
        key: CoverKey,
        texture: egui::TextureHandle,
    },
    /// A decoded cover never became a texture; allow it to be requested again.
    CoverDiscarded(CoverKey),
    OpenCatalog,
    PickCancelled,
    CatalogLoaded {
        catalog: Catalog,
        source: PathBuf,
    },
    LoadFailed(String),
}

/// Side effects requested by the catalog.
#[derive(Debug, PartialEq, Eq)]
pub enum CatalogCommand {
    LoadCover { key: CoverKey },
    PickCatalogFile,
}

/// User-facing feedback surfaced to the status bar or error modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEvent {
    pub message: String,
    pub is_error: bool,
}

impl CatalogModel {
    pub fn new(catalog: Catalog, source: Option<PathBuf>) -> Self {
        Self {
            catalog,
            source,
            covers: HashMap::new(),
            requested: HashSet::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// File the catalog was loaded from; `None` for the built-in list.
    pub fn source(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }
}

/// Apply a message to the catalog model.
pub fn update(
    model: &mut CatalogModel,
    msg: CatalogMsg,
    cmds: &mut Vec<CatalogCommand>,
) -> Option<CatalogEvent> {
    match msg {
        // The root intercepts this; nothing to do locally.
        CatalogMsg::AddToCart(_) => None,
        CatalogMsg::RequestCover(key) => {
            if !model.covers.contains_key(&key) && model.requested.insert(key.clone()) {
                cmds.push(CatalogCommand::LoadCover { key });
            }
            None
        }
        CatalogMsg::CoverReady { key, texture } => {
            // Drop textures that arrive after the catalog was replaced.
            if model.requested.contains(&key) {
                model.covers.insert(key, texture);
            }
            None
        }
        CatalogMsg::CoverDiscarded(key) => {
            if !model.covers.contains_key(&key) {
                model.requested.remove(&key);
            }
            None
        }
        CatalogMsg::OpenCatalog => {
            cmds.push(CatalogCommand::PickCatalogFile);
            None
        }
        CatalogMsg::PickCancelled => Some(CatalogEvent {
            message: "Open catalog cancelled.".into(),
            is_error: false,
        }),
        CatalogMsg::CatalogLoaded { catalog, source } => {
            let message = format!(
                "Loaded {} book(s) from {}",
                catalog.books().len(),
                source.display()
            );
            *model = CatalogModel::new(catalog, Some(source));
            Some(CatalogEvent {
                message,
                is_error: false,
            })
        }
        CatalogMsg::LoadFailed(err) => Some(CatalogEvent {
            message: format!("Failed to load catalog:\n\n{err}"),
            is_error: true,
        }),
    }
}

/// Render the catalog table and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &CatalogModel) -> Vec<CatalogMsg> {
    let mut msgs = Vec::new();

    if let Some(source) = model.source() {
        ui.label(
            egui::RichText::new(format!("Catalog: {}", source.display()))
                .small()
                .color(egui::Color32::from_gray(110)),
        );
        ui.add_space(4.0);
    }

    if model.catalog.is_empty() {
        ui.label(
            egui::RichText::new("This catalog has no books.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return msgs;
    }

    let cover_px = COVER_SIZE as f32;
    let row_height = cover_px + 8.0;

    // The central panel already scrolls.
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(cover_px + 10.0))
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto())
        .body(|mut body| {
            for (index, book) in model.catalog.books().iter().enumerate() {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        let key: CoverKey = book.image_path.clone();
                        if let Some(texture) = model.covers.get(&key) {
                            ui.add(egui::Image::new((
                                texture.id(),
                                egui::vec2(cover_px, cover_px),
                            )));
                        } else {
                            if !model.requested.contains(&key) {
                                msgs.push(CatalogMsg::RequestCover(key));
                            }
                            ui.allocate_space(egui::vec2(cover_px, cover_px));
                        }
                    });
                    row.col(|ui| {
                        ui.label(book.title.as_str());
                    });
                    row.col(|ui| {
                        ui.label(book.author.as_str());
                    });
                    row.col(|ui| {
                        ui.label(book.cost.to_string());
                    });
                    row.col(|ui| {
                        if ui
                            .button(format!(
                                "{} Add to Cart",
                                egui_phosphor::regular::SHOPPING_CART_SIMPLE
                            ))
                            .clicked()
                        {
                            msgs.push(CatalogMsg::AddToCart(index));
                        }
                    });
                });
            }
        });

    msgs
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::models::book::Book;
    use crate::models::price::Price;

    #[test]
    fn request_cover_enqueues_once_per_key() {
        let mut model = CatalogModel::default();
        let mut cmds = Vec::new();
        let key: CoverKey = Some(PathBuf::from("book1.jpg"));

        update(&mut model, CatalogMsg::RequestCover(key.clone()), &mut cmds);
        update(&mut model, CatalogMsg::RequestCover(key.clone()), &mut cmds);

        assert_eq!(cmds, vec![CatalogCommand::LoadCover { key }]);
    }

    #[test]
    fn placeholder_key_is_requested_like_any_other() {
        let mut model = CatalogModel::default();
        let mut cmds = Vec::new();

        update(&mut model, CatalogMsg::RequestCover(None), &mut cmds);

        assert_eq!(cmds, vec![CatalogCommand::LoadCover { key: None }]);
    }

    #[test]
    fn open_catalog_requests_file_pick() {
        let mut model = CatalogModel::default();
        let mut cmds = Vec::new();

        let event = update(&mut model, CatalogMsg::OpenCatalog, &mut cmds);

        assert!(event.is_none());
        assert_eq!(cmds, vec![CatalogCommand::PickCatalogFile]);
    }

    #[test]
    fn catalog_loaded_replaces_books_and_resets_cover_requests() {
        let mut model = CatalogModel::default();
        let mut cmds = Vec::new();
        let key: CoverKey = Some(PathBuf::from("book1.jpg"));
        update(&mut model, CatalogMsg::RequestCover(key.clone()), &mut cmds);

        let replacement = Catalog::new(vec![Book::new(
            "Dune",
            "Herbert",
            Price::from_cents(900),
            None,
        )]);
        let event = update(
            &mut model,
            CatalogMsg::CatalogLoaded {
                catalog: replacement.clone(),
                source: PathBuf::from("/shop/catalog.json"),
            },
            &mut cmds,
        )
        .expect("event expected");

        assert!(!event.is_error);
        assert!(event.message.contains("Loaded 1 book(s)"));
        assert_eq!(model.catalog(), &replacement);
        assert_eq!(
            model.source(),
            Some(&PathBuf::from("/shop/catalog.json"))
        );

        cmds.clear();
        update(&mut model, CatalogMsg::RequestCover(key.clone()), &mut cmds);
        assert_eq!(cmds.len(), 1, "cover may be requested again after reload");
    }

    #[test]
    fn load_failure_is_an_error_event() {
        let mut model = CatalogModel::default();
        let mut cmds = Vec::new();

        let event = update(
            &mut model,
            CatalogMsg::LoadFailed("bad json".into()),
            &mut cmds,
        )
        .expect("event expected");

        assert!(event.is_error);
        assert!(event.message.contains("bad json"));
        assert_eq!(model.catalog(), &Catalog::builtin());
    }

    #[test]
    fn pick_cancelled_is_informational() {
        let mut model = CatalogModel::default();
        let mut cmds = Vec::new();

        let event = update(&mut model, CatalogMsg::PickCancelled, &mut cmds).expect("event");

        assert!(!event.is_error);
        assert!(cmds.is_empty());
    }

    fn texture() -> egui::TextureHandle {
        egui::Context::default().load_texture(
            "cover",
            egui::ColorImage::example(),
            egui::TextureOptions::default(),
        )
    }

    #[test]
    fn ready_cover_is_cached_and_not_requested_again() {
        let mut model = CatalogModel::default();
        let mut cmds = Vec::new();
        let key: CoverKey = Some(PathBuf::from("book3.jpg"));
        update(&mut model, CatalogMsg::RequestCover(key.clone()), &mut cmds);

        update(
            &mut model,
            CatalogMsg::CoverReady {
                key: key.clone(),
                texture: texture(),
            },
            &mut cmds,
        );
        cmds.clear();
        update(&mut model, CatalogMsg::CoverDiscarded(key.clone()), &mut cmds);
        update(&mut model, CatalogMsg::RequestCover(key.clone()), &mut cmds);

        assert!(model.covers.contains_key(&key));
        assert!(cmds.is_empty(), "cached cover must not be loaded again");
    }

    #[test]
    fn cover_requested_before_reload_is_dropped() {
        let mut model = CatalogModel::default();
        let mut cmds = Vec::new();
        let key: CoverKey = Some(PathBuf::from("book1.jpg"));
        update(&mut model, CatalogMsg::RequestCover(key.clone()), &mut cmds);
        update(
            &mut model,
            CatalogMsg::CatalogLoaded {
                catalog: Catalog::builtin(),
                source: PathBuf::from("/shop/catalog.json"),
            },
            &mut cmds,
        );

        update(
            &mut model,
            CatalogMsg::CoverReady {
                key: key.clone(),
                texture: texture(),
            },
            &mut cmds,
        );

        assert!(!model.covers.contains_key(&key));
    }

    #[test]
    fn unrequested_cover_is_ignored() {
        let mut model = CatalogModel::default();
        let mut cmds = Vec::new();

        update(
            &mut model,
            CatalogMsg::CoverReady {
                key: None,
                texture: texture(),
            },
            &mut cmds,
        );

        assert!(model.covers.is_empty());
        assert!(cmds.is_empty());
    }

    #[test]
    fn discarded_cover_can_be_requested_again() {
        let mut model = CatalogModel::default();
        let mut cmds = Vec::new();
        let key: CoverKey = Some(PathBuf::from("book4.jpg"));
        update(&mut model, CatalogMsg::RequestCover(key.clone()), &mut cmds);

        update(&mut model, CatalogMsg::CoverDiscarded(key.clone()), &mut cmds);
        update(&mut model, CatalogMsg::RequestCover(key.clone()), &mut cmds);

        assert_eq!(
            cmds,
            vec![
                CatalogCommand::LoadCover { key: key.clone() },
                CatalogCommand::LoadCover { key }
            ]
        );
    }
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::path::PathBuf;

use crate::logic::catalog_loader::load_catalog_file;
use crate::logic::covers::load_cover;
use crate::models::book::Book;
use crate::ui::components::cart::{self, CartModel, CartMsg};
use crate::ui::components::catalog::{
    self, CatalogCommand, CatalogModel, CatalogMsg, CoverKey,
};
use crate::ui::components::search::{self, SearchModel, SearchMsg};

/// Notebook tabs shown in the top bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Catalog,
    Cart,
    Search,
}

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Tab currently shown in the central panel.
    pub active_tab: Tab,
    /// Catalog listing and cover cache.
    pub catalog: CatalogModel,
    /// Items added so far.
    pub cart: CartModel,
    /// Search form state.
    pub search: SearchModel,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
pub enum Msg {
    SelectTab(Tab),
    CoverDecoded {
        key: CoverKey,
        image: eframe::egui::ColorImage,
    },
    CoverReady {
        key: CoverKey,
        texture: eframe::egui::TextureHandle,
    },
    DismissError,
    Catalog(CatalogMsg),
    Cart(CartMsg),
    Search(SearchMsg),
}

/// Commands represent side-effects executed between frames.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    LoadCover { key: CoverKey },
    PickCatalogFile,
    LoadCatalog(PathBuf),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::SelectTab(tab) => model.active_tab = tab,
        Msg::DismissError => model.error = None,
        Msg::CoverDecoded { key, .. } => {
            // The shell turns these into CoverReady; release the key so the row can ask again.
            log::warn!("Cover {key:?} reached update without a texture; dropping it");
            forward_catalog(model, CatalogMsg::CoverDiscarded(key), cmds);
        }
        Msg::CoverReady { key, texture } => {
            forward_catalog(model, CatalogMsg::CoverReady { key, texture }, cmds);
        }
        Msg::Catalog(CatalogMsg::AddToCart(index)) => {
            match model.catalog.catalog().get(index).cloned() {
                Some(book) => add_book_to_cart(model, &book),
                None => log::warn!("Ignoring add-to-cart for unknown catalog row {index}"),
            }
        }
        Msg::Catalog(m) => forward_catalog(model, m, cmds),
        Msg::Cart(m) => {
            if let Some(event) = cart::update(&mut model.cart, m) {
                surface_event(model, event.message, event.is_error);
            }
        }
        Msg::Search(m) => {
            if let Some(book) = search::update(&mut model.search, m, model.catalog.catalog()) {
                add_book_to_cart(model, &book);
            }
        }
    }
}

/// Execute a command synchronously and return a resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::LoadCover { key } => {
            let cover = load_cover(key.as_deref());
            log::trace!("Decoded cover {key:?} (placeholder: {})", cover.placeholder);
            Msg::CoverDecoded {
                key,
                image: cover.image,
            }
        }
        Command::PickCatalogFile => {
            let file = rfd::FileDialog::new()
                .set_title("Open book catalog")
                .add_filter("JSON", &["json"])
                .pick_file();
            match file {
                Some(path) => run_command(Command::LoadCatalog(path)),
                None => Msg::Catalog(CatalogMsg::PickCancelled),
            }
        }
        Command::LoadCatalog(path) => match load_catalog_file(&path) {
            Ok(catalog) => Msg::Catalog(CatalogMsg::CatalogLoaded {
                catalog,
                source: path,
            }),
            Err(err) => {
                log::warn!("Catalog load failed: {err:#}");
                Msg::Catalog(CatalogMsg::LoadFailed(format!("{err:#}")))
            }
        },
    }
}

/// Shared add path for the catalog buttons and the search tab.
fn add_book_to_cart(model: &mut AppModel, book: &Book) {
    model.cart.add(book);
    log::info!("Added {:?} to cart ({} item(s))", book.title, model.cart.cart().len());
    surface_event(model, format!("Added \"{}\" to cart", book.title), false);
}

fn forward_catalog(model: &mut AppModel, msg: CatalogMsg, cmds: &mut Vec<Command>) {
    let mut catalog_cmds = Vec::new();
    if let Some(event) = catalog::update(&mut model.catalog, msg, &mut catalog_cmds) {
        surface_event(model, event.message, event.is_error);
    }
    for c in catalog_cmds {
        match c {
            CatalogCommand::LoadCover { key } => cmds.push(Command::LoadCover { key }),
            CatalogCommand::PickCatalogFile => cmds.push(Command::PickCatalogFile),
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}

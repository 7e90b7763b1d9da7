// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Search tab: find the first title match and hand it back for adding to the cart.

use eframe::egui;

use crate::models::book::{Book, Catalog};

/// Result of the most recent search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Added { title: String },
    NotFound,
}

impl SearchOutcome {
    /// Label text shown under the search button.
    pub fn message(&self) -> &'static str {
        match self {
            SearchOutcome::Added { .. } => "Book added to cart.",
            SearchOutcome::NotFound => "Book not found.",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Added { .. })
    }
}

/// UI model for the search tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchModel {
    query: String,
    outcome: Option<SearchOutcome>,
}

/// Messages emitted by the search view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchMsg {
    QueryChanged(String),
    Submit,
}

impl SearchModel {
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }
}

/// Apply a message. On a successful search, returns the book the caller should add to the cart.
pub fn update(model: &mut SearchModel, msg: SearchMsg, catalog: &Catalog) -> Option<Book> {
    match msg {
        SearchMsg::QueryChanged(text) => {
            model.query = text;
            None
        }
        SearchMsg::Submit => match catalog.find_first_by_title(&model.query) {
            Some((_, book)) => {
                model.outcome = Some(SearchOutcome::Added {
                    title: book.title.clone(),
                });
                Some(book.clone())
            }
            None => {
                log::debug!("Search for {:?} found nothing", model.query);
                model.outcome = Some(SearchOutcome::NotFound);
                None
            }
        },
    }
}

/// Render the search form and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &SearchModel) -> Vec<SearchMsg> {
    let mut msgs = Vec::new();

    ui.vertical_centered(|ui| {
        ui.add_space(10.0);
        ui.heading(egui::RichText::new("Search").size(18.0));
        ui.add_space(10.0);

        let mut query = model.query.clone();
        let resp = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Part of a title, e.g. potter")
                .desired_width(260.0),
        );
        if resp.changed() {
            msgs.push(SearchMsg::QueryChanged(query));
        }
        let enter = resp.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter));

        ui.add_space(5.0);
        let clicked = ui
            .button(format!(
                "{} Search & add",
                egui_phosphor::regular::MAGNIFYING_GLASS
            ))
            .clicked();
        if enter || clicked {
            msgs.push(SearchMsg::Submit);
        }

        ui.add_space(10.0);
        if let Some(outcome) = model.outcome() {
            let color = if outcome.is_success() {
                egui::Color32::from_rgb(0, 128, 0)
            } else {
                egui::Color32::RED
            };
            ui.label(egui::RichText::new(outcome.message()).size(12.0).color(color));
        }
    });

    msgs
}

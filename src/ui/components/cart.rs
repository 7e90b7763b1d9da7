// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Cart tab: removable rows plus a running total.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::models::book::Book;
use crate::models::cart::{Cart, CartItemId};

/// UI model for the cart tab.
#[derive(Clone, Debug, Default)]
pub struct CartModel {
    cart: Cart,
}

/// Messages emitted by the cart view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartMsg {
    Remove(CartItemId),
    Clear,
}

/// User-facing feedback surfaced to the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartEvent {
    pub message: String,
    pub is_error: bool,
}

impl CartModel {
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Append a book; used by both the catalog buttons and search.
    pub fn add(&mut self, book: &Book) -> CartItemId {
        let id = self.cart.add(book);
        log::debug!("Cart add {:?}: {} ({})", id, book.title, book.cost);
        id
    }
}

/// Apply a message to the cart model. Returns a feedback event when relevant.
pub fn update(model: &mut CartModel, msg: CartMsg) -> Option<CartEvent> {
    match msg {
        CartMsg::Remove(id) => {
            let removed = model.cart.remove(id)?;
            log::debug!("Cart remove {:?}: {}", id, removed.title);
            Some(CartEvent {
                message: format!("Removed \"{}\" from cart", removed.title),
                is_error: false,
            })
        }
        CartMsg::Clear => {
            if model.cart.is_empty() {
                return None;
            }
            log::debug!("Cart cleared ({} item(s))", model.cart.len());
            model.cart.clear();
            Some(CartEvent {
                message: "Cart cleared".into(),
                is_error: false,
            })
        }
    }
}

/// Render the cart and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &CartModel) -> Vec<CartMsg> {
    let mut msgs = Vec::new();

    ui.vertical_centered(|ui| {
        ui.add_space(10.0);
        ui.heading(egui::RichText::new("Cart").size(18.0));
        ui.add_space(10.0);
    });

    if model.cart.is_empty() {
        ui.label(
            egui::RichText::new("Your cart is empty.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return msgs;
    }

    // The central panel already scrolls.
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto())
        .body(|mut body| {
            for item in model.cart.items() {
                body.row(28.0, |mut row| {
                    row.col(|ui| {
                        ui.label(item.title.as_str());
                    });
                    row.col(|ui| {
                        ui.label(item.author.as_str());
                    });
                    row.col(|ui| {
                        ui.label(item.cost.to_string());
                    });
                    row.col(|ui| {
                        if ui
                            .button(format!(
                                "{} Remove",
                                egui_phosphor::regular::TRASH_SIMPLE
                            ))
                            .clicked()
                        {
                            msgs.push(CartMsg::Remove(item.id));
                        }
                    });
                });
            }
        });

    ui.separator();
    ui.horizontal(|ui| {
        ui.strong(format!(
            "{} item(s), total {}",
            model.cart.len(),
            model.cart.total()
        ));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Clear cart").clicked() {
                msgs.push(CartMsg::Clear);
            }
        });
    });

    msgs
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the book store.
//! Handles the tab bar, status/error surfaces, and the worker pool for side effects.

pub mod components;

use eframe::egui;

use crate::mvu::{self, AppModel, Command, Msg, Tab};
use crate::ui::components::{cart, catalog, search};

/// Stateful egui application for browsing the catalog and managing the cart.
pub struct BookStoreApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl BookStoreApp {
    /// Start the worker pool and wrap an initial model.
    pub fn new(model: AppModel) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().clamp(2, 4))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }
        log::debug!("Started {threads} command worker(s)");

        Self {
            model,
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for BookStoreApp {
    /// Required by eframe 0.34; all rendering happens in `update`, which eframe still calls first.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drain worker results, apply queued messages, then render the top bar, status bar, and active tab.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        let mut received = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
            received = true;
        }

        let mut msgs = std::mem::take(&mut self.inbox);
        // Apply in arrival order; decoded covers re-enter the queue as textures.
        msgs.reverse();
        while let Some(msg) = msgs.pop() {
            match msg {
                Msg::CoverDecoded { key, image } => {
                    let name = match &key {
                        Some(path) => format!("cover-{}", path.display()),
                        None => "cover-placeholder".to_string(),
                    };
                    let texture = ctx.load_texture(name, image, egui::TextureOptions::default());
                    msgs.push(Msg::CoverReady { key, texture });
                }
                other => {
                    let mut commands = Vec::new();
                    mvu::update(&mut self.model, other, &mut commands);
                    for cmd in commands {
                        if self.cmd_tx.send(cmd).is_ok() {
                            self.model.pending_commands += 1;
                        }
                    }
                }
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                self.render_tabs(ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                    ui.separator();
                    self.render_open_catalog_button(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.model.active_tab {
                Tab::Catalog => {
                    let msgs = catalog::view(ui, &self.model.catalog);
                    self.inbox.extend(msgs.into_iter().map(Msg::Catalog));
                }
                Tab::Cart => {
                    let msgs = cart::view(ui, &self.model.cart);
                    self.inbox.extend(msgs.into_iter().map(Msg::Cart));
                }
                Tab::Search => {
                    let msgs = search::view(ui, &self.model.search);
                    self.inbox.extend(msgs.into_iter().map(Msg::Search));
                }
            });
        });

        // Keep frames coming while workers run or the views queued follow-up messages.
        if received || !self.inbox.is_empty() || self.model.pending_commands > 0 {
            ctx.request_repaint();
        }
    }
}

impl BookStoreApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Notebook-style tab strip. The cart tab shows its item count.
    fn render_tabs(&mut self, ui: &mut egui::Ui) {
        let cart_len = self.model.cart.cart().len();
        let cart_label = if cart_len > 0 {
            format!("Cart ({cart_len})")
        } else {
            "Cart".to_string()
        };
        let tabs = [
            (Tab::Catalog, "Catalog".to_string()),
            (Tab::Cart, cart_label),
            (Tab::Search, "Search".to_string()),
        ];

        let mut choice = self.model.active_tab;
        for (tab, label) in tabs {
            ui.selectable_value(&mut choice, tab, label);
        }
        if choice != self.model.active_tab {
            self.inbox.push(Msg::SelectTab(choice));
        }
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    fn render_open_catalog_button(&mut self, ui: &mut egui::Ui) {
        if ui
            .button(format!(
                "{} Open catalog…",
                egui_phosphor::regular::FOLDER_OPEN
            ))
            .on_hover_text("Load books from a JSON catalog file")
            .clicked()
        {
            self.inbox
                .push(Msg::Catalog(catalog::CatalogMsg::OpenCatalog));
        }
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status message, with a spinner while workers are busy.
    fn render_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(text) = &self.model.status {
                ui.label(egui::RichText::new(text.as_str()).color(egui::Color32::from_gray(68)));
            }
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                    "{} task(s) running in background",
                    self.model.pending_commands
                ));
            }
        });
    }
}

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod logic;
mod models;
mod mvu;
mod ui;
mod utils;

use clap::Parser;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = app::AppConfig::parse();
    app::run(config)
}

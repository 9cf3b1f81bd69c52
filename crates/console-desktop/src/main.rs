//! Catalog Console Desktop Application
//!
//! Settings navigation and dbt ingestion configuration for a data catalog.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("console_desktop=debug,console_core=debug")),
        )
        .init();

    tracing::info!("Starting Catalog Console...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Catalog Console")
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}

//! Alertdesk Desktop Application
//!
//! Project alert settings: digest delivery frequency and notification
//! plugins.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod bootstrap_config;
mod components;
mod plugins;
mod services;
mod state;
mod theme;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "alertdesk=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Alertdesk...");

    let bootstrap = bootstrap_config::load_bootstrap();
    if let Err(error) = &bootstrap.config {
        tracing::error!("Client configuration is incomplete: {}", error);
    }

    let config = Config::new().with_window(WindowBuilder::new().with_title("Alertdesk"));

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .with_context(bootstrap)
        .launch(app::App);
}

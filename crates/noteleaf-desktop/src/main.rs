//! Noteleaf Desktop Application
//!
//! A small desktop app for viewing, editing, sharing and deleting notes.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod theme;
mod viewmodel;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("noteleaf=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Noteleaf...");

    let window = WindowBuilder::new().with_title("Noteleaf");
    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}

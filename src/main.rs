#![allow(warnings)]
//! Menu Manager Frontend Entry Point

mod models;
mod manager;
mod config;
mod error;
mod logging;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::UiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, load_error) = match UiConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (UiConfig::default(), Some(e)),
    };
    logging::init(config.level_filter());
    if let Some(e) = load_error {
        log::warn!("Using default UI config: {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}

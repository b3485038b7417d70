//! Storefront Frontend Entry Point

mod app;
mod cart_view;
mod commands;
mod components;
mod config;
mod content;
mod context;
mod error;
mod loader;
mod models;
mod optimistic;
mod pages;
mod routes;
mod store;

use app::App;
use config::StorefrontConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = StorefrontConfig::from_window();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => StorefrontConfig::default(),
    };

    if let Err(e) = rolling_logger::init(config.log_level.filter(), rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    match loaded {
        Ok(Some(_)) => log::info!("[APP] Using configured store {}", config.store_domain),
        Ok(None) => log::info!("[APP] No store configured, using the demo shop"),
        Err(e) => log::error!("[APP] Invalid store config, using the demo shop: {}", e),
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}

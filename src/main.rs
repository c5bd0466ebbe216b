#![allow(warnings)]
//! UI Catalog Entry Point

mod models;
mod config;
mod stack;
mod chart;
mod crumbs;
mod typewriter;
mod markdown;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::{CatalogConfig, EMBEDDED_CONFIG};
use leptos::prelude::*;
use rolling_logger::LoggerConfig;
use tracing::{info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match CatalogConfig::from_json(EMBEDDED_CONFIG) {
        Ok(config) => (config, None),
        Err(e) => (CatalogConfig::default(), Some(e)),
    };

    let log = rolling_logger::init(LoggerConfig {
        level: config.log_filter(),
        ..Default::default()
    });
    log.set_echo(Box::new(|line| web_sys::console::log_1(&line.into())));

    if let Some(e) = config_error {
        warn!(error = %e, "using built-in catalog config");
    }
    info!(board = config.board.len(), cards = config.cards.len(), "catalog starting");

    mount_to_body(move || view! { <App config=config log=log /> });
}

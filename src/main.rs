//! ESCALA360 Frontend Entry Point

mod api;
mod binder;
mod chart;
mod components;
mod config;
mod context;
mod dashboard;
mod forms;
mod models;
mod pages;
mod render;
mod resources;
mod store;
mod theme;
mod toast;
mod transition;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let config = AppConfig::load();
    transition::install(config.transition_delay_ms);
    log::info!("[MAIN] ESCALA360 UI starting");

    mount_to_body(move || view! { <App config=config /> });
}

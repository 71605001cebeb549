pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;
pub mod usecases;

use leptos::prelude::*;
use shared::config::AppConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = AppConfig::install(AppConfig::load()).clone();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level);
    console_error_panic_hook::set_once();

    log::info!("ERP admin starting, api base {}", config.api_base);

    leptos::mount::mount_to_body(move || view! { <app::App config=config.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

//! SoundFood Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod logger;
mod messages;
mod models;
mod settings;
mod store;
mod submit;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::log_level());
    log::info!("SoundFood starting, API at {}", config::api_base_url());
    mount_to_body(App);
}

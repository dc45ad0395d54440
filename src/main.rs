//! HN Pager Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod error;
mod export;
mod feed;
mod logging;
mod models;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(AppConfig::default().log_level);
    mount_to_body(App);
}

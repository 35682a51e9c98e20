//! Waste Exchange Frontend Entry Point

mod actions;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod logging;
mod models;
mod render;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}

//! Focus & Flow Frontend Entry Point

mod models;
mod error;
mod config;
mod filter;
mod form;
mod frame;
mod view_model;
mod reconciler;
mod commands;
mod theme;
mod store;
mod presenter;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}

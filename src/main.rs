#![allow(warnings)]
//! Film Crawl Frontend Entry Point

mod models;
mod error;
mod config;
mod text;
mod graphql;
mod state;
mod render;
mod context;
mod theme;
mod chrome;
mod components;
mod app;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(tracing::Level::DEBUG) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    chrome::apply_status_bar(chrome::STATUS_BAR_COLOR);

    mount_to_body(|| {
        provide_context(ClientConfig::default());
        view! { <App /> }
    });
}

//! Todo List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod text;

use std::rc::Rc;

use app::App;
use config::UiConfig;
use leptos::prelude::*;
use todo_store::TodoStore;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();

    let config = UiConfig::from_page();
    let store = Rc::new(TodoStore::with_config(config.store));
    log::info!("[MAIN] Mounting todo list with {:?}", store.config());

    mount_to_body(move || view! { <App store=store config=config /> });
}

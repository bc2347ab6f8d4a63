//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use todo_store::{Todo, TodoError, TodoKey, TodoResult, TodoStore};

use crate::config::UiConfig;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The todo store, owned by the entry point
    store: StoredValue<Rc<TodoStore>, LocalStorage>,
    /// Latest snapshot, replaced on every store notification
    pub todos: ReadSignal<Vec<(TodoKey, Todo)>>,
    config: StoredValue<UiConfig>,
}

impl AppContext {
    pub fn new(
        store: Rc<TodoStore>,
        todos: ReadSignal<Vec<(TodoKey, Todo)>>,
        config: UiConfig,
    ) -> Self {
        Self {
            store: StoredValue::new_local(store),
            todos,
            config: StoredValue::new(config),
        }
    }

    pub fn add(&self, text: String) -> TodoResult<TodoKey> {
        self.store.with_value(|store| store.add(text))
    }

    pub fn remove(&self, key: TodoKey) -> Option<Todo> {
        self.store.with_value(|store| store.remove(key))
    }

    pub fn update_text(&self, key: TodoKey, text: String) -> TodoResult<()> {
        self.store.with_value(|store| store.update_text(key, text))
    }

    pub fn toggle_complete(&self, key: TodoKey, completed: bool) -> TodoResult<()> {
        self.store.with_value(|store| store.toggle_complete(key, completed))
    }

    /// Read a value out of the UI configuration
    pub fn with_config<R>(&self, f: impl FnOnce(&UiConfig) -> R) -> R {
        self.config.with_value(f)
    }

    pub fn alert(&self, message: &str) {
        if window().alert_with_message(message).is_err() {
            log::warn!("[APP] Could not show alert: {}", message);
        }
    }

    /// Surface a store error to the user
    pub fn report(&self, err: &TodoError) {
        log::warn!("[APP] {}", err);
        self.alert(&err.to_string());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

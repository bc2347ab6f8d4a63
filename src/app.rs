//! Todo List App
//!
//! Root component. Subscribes to the store and keeps the latest snapshot in
//! a signal that the list is rebuilt from.

use std::rc::Rc;

use leptos::prelude::*;
use todo_store::TodoStore;

use crate::components::{NewTodoForm, TodoList};
use crate::config::UiConfig;
use crate::context::AppContext;

#[component]
pub fn App(store: Rc<TodoStore>, config: UiConfig) -> impl IntoView {
    let (todos, set_todos) = signal(store.get_all());
    let title = config.title.clone();

    // Re-read the full snapshot on every change. Weak, since the store owns
    // this closure.
    let weak_store = Rc::downgrade(&store);
    store.on_change(move || {
        if let Some(store) = weak_store.upgrade() {
            let snapshot = store.get_all();
            log::debug!("[APP] Rendering {} todos", snapshot.len());
            set_todos.set(snapshot);
        }
    });

    provide_context(AppContext::new(store, todos, config));

    view! {
        <main class="todo-app">
            <h1>{title}</h1>

            <NewTodoForm />

            <TodoList />
        </main>
    }
}

//! Todo List Component
//!
//! Rebuilt in full from the latest snapshot whenever the store changes.

use leptos::prelude::*;

use crate::components::TodoEntry;
use crate::context::use_app_context;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div id="list_container" class="todo-list">
            {move || {
                let todos = ctx.todos.get();
                if todos.is_empty() {
                    let message = ctx.with_config(|c| c.empty_message.clone());
                    view! { <p class="empty-message">{message}</p> }.into_any()
                } else {
                    todos
                        .into_iter()
                        .map(|(todo_key, todo)| view! { <TodoEntry todo_key=todo_key todo=todo /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

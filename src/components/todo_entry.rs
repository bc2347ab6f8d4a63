//! Todo Entry Component
//!
//! One row of the list: completion checkbox, click-to-edit text, delete.

use leptos::html;
use leptos::prelude::*;
use todo_store::{Todo, TodoKey};

use crate::context::use_app_context;
use crate::text::{display_text, normalize_input};

/// A single todo row
#[component]
pub fn TodoEntry(todo_key: TodoKey, todo: Todo) -> impl IntoView {
    let ctx = use_app_context();

    let (editing, set_editing) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let completed = todo.completed;
    let text = todo.text;
    let label = ctx.with_config(|c| display_text(&text, &c.edit_placeholder).to_string());
    let delete_label = ctx.with_config(|c| c.delete_button_label.clone());

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    // Leaving the edit input saves; a successful update re-renders the list
    let save_edit = move |_| {
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        let Some(new_text) = normalize_input(&input.value()) else {
            ctx.alert(&ctx.with_config(|c| c.empty_edit_alert.clone()));
            let _ = input.focus();
            return;
        };
        if let Err(err) = ctx.update_text(todo_key, new_text) {
            ctx.report(&err);
        }
    };

    view! {
        <div class=if completed { "list-template completed" } else { "list-template" }>
            // Checkbox
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |ev| {
                    if let Err(err) = ctx.toggle_complete(todo_key, event_target_checked(&ev)) {
                        ctx.report(&err);
                    }
                }
            />

            // Text, swapped for an input while editing
            {move || if editing.get() {
                view! {
                    <input
                        type="text"
                        class="todo-edit"
                        node_ref=input_ref
                        prop:value=text.clone()
                        on:blur=save_edit
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                if let Some(input) = input_ref.get_untracked() {
                                    let _ = input.blur();
                                }
                            }
                        }
                    />
                }.into_any()
            } else {
                view! {
                    <p class="todo-text" on:click=move |_| set_editing.set(true)>{label.clone()}</p>
                }.into_any()
            }}

            // Delete button
            <button class="delete-btn" on:click=move |_| {
                ctx.remove(todo_key);
            }>{delete_label}</button>
        </div>
    }
}

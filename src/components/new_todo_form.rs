//! New Todo Form Component
//!
//! "Add Todo" button that opens a one-off input for capturing a new task.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::text::normalize_input;

/// Add button plus the transient input row shown above the list
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let (composing, set_composing) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let focus_input = move || {
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    // Focus the input as soon as it is mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    // Only one input at a time: a second click refocuses the open one
    let open = move |_| {
        if composing.get_untracked() {
            focus_input();
        } else {
            set_composing.set(true);
        }
    };

    let save = move || {
        let raw = input_ref.get_untracked().map(|input| input.value()).unwrap_or_default();
        let Some(text) = normalize_input(&raw) else {
            ctx.alert(&ctx.with_config(|c| c.empty_task_alert.clone()));
            focus_input();
            return;
        };

        match ctx.add(text) {
            Ok(key) => {
                log::debug!("[NewTodoForm] Saved todo {}", key);
                set_composing.set(false);
            }
            Err(err) => ctx.report(&err),
        }
    };

    let add_label = ctx.with_config(|c| c.add_button_label.clone());
    let placeholder = ctx.with_config(|c| c.input_placeholder.clone());
    let save_label = ctx.with_config(|c| c.save_button_label.clone());

    view! {
        <button id="add-item" class="add-btn" on:click=open>{add_label}</button>

        <Show when=move || composing.get()>
            <div class="new-todo-row">
                <input
                    type="text"
                    id="new-task-input"
                    placeholder=placeholder.clone()
                    node_ref=input_ref
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            save();
                        }
                    }
                />
                <button class="save-btn" on:click=move |_| save()>{save_label.clone()}</button>
            </div>
        </Show>
    }
}

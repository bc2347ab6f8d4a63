//! UI Components
//!
//! Leptos components for the todo list.

mod new_todo_form;
mod todo_entry;
mod todo_list;

pub use new_todo_form::NewTodoForm;
pub use todo_entry::TodoEntry;
pub use todo_list::TodoList;

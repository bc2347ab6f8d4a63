//! Todo Store
//!
//! In-memory todo collection that notifies a single observer after every
//! mutation. Has no knowledge of rendering; the UI layer subscribes with
//! [`TodoStore::on_change`] and re-reads [`TodoStore::get_all`].

mod config;
mod error;
mod store;
mod todo;

#[cfg(test)]
mod tests;

pub use config::StoreConfig;
pub use error::{TodoError, TodoResult};
pub use store::TodoStore;
pub use todo::{Todo, TodoKey};

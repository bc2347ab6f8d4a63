//! Todo Store
//!
//! Single source of truth for the todo collection. Every successful mutation
//! is committed first, then reported to the one registered observer.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::config::StoreConfig;
use crate::error::{TodoError, TodoResult};
use crate::todo::{Todo, TodoKey};

type Observer = Box<dyn FnMut()>;

/// In-memory todo collection with a single change observer
///
/// Methods take `&self` so the store can be shared through an `Rc` between
/// the entry point and the UI; the observer itself may call back into the
/// store (typically [`TodoStore::get_all`]) while it runs.
pub struct TodoStore {
    /// Keys are handed out in increasing order, so map order is insertion order
    todos: RefCell<BTreeMap<TodoKey, Todo>>,
    next_key: Cell<u64>,
    observer: Cell<Option<Observer>>,
    config: StoreConfig,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("todos", &self.todos.borrow())
            .field("next_key", &self.next_key.get())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TodoStore {
    /// Create an empty store with the permissive default policy
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            todos: RefCell::new(BTreeMap::new()),
            next_key: Cell::new(1),
            observer: Cell::new(None),
            config,
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    // ========================
    // Mutations
    // ========================

    /// Insert a new open task and return its key
    ///
    /// # Errors
    /// `InvalidInput` if the text is blank and the store rejects blank text,
    /// `KeysExhausted` once the key counter has run out.
    pub fn add(&self, text: impl Into<String>) -> TodoResult<TodoKey> {
        let text = text.into();
        self.check_text(&text)?;

        let key = self.allocate_key()?;
        self.todos.borrow_mut().insert(key, Todo::new(text));
        log::debug!("[STORE] Added todo {}", key);

        self.notify();
        Ok(key)
    }

    /// Delete the task under `key`, returning it if it was present
    ///
    /// An absent key is not an error. The observer still runs unless the
    /// store is configured with `notify_on_missing_remove = false`.
    pub fn remove(&self, key: TodoKey) -> Option<Todo> {
        let removed = self.todos.borrow_mut().remove(&key);
        match removed {
            Some(_) => log::debug!("[STORE] Removed todo {}", key),
            None => log::debug!("[STORE] Remove of absent todo {}", key),
        }

        if removed.is_some() || self.config.notify_on_missing_remove {
            self.notify();
        }
        removed
    }

    /// Replace the text of an existing task
    ///
    /// # Errors
    /// `InvalidInput` for blank text on a strict store, `NotFound` if `key`
    /// is not in the collection. Neither notifies.
    pub fn update_text(&self, key: TodoKey, text: impl Into<String>) -> TodoResult<()> {
        let text = text.into();
        self.check_text(&text)?;
        self.modify(key, |todo| todo.text = text)?;
        log::debug!("[STORE] Updated text of todo {}", key);
        Ok(())
    }

    /// Set the completion flag of an existing task to `completed`
    ///
    /// This assigns rather than flips: the caller passes the target state.
    ///
    /// # Errors
    /// `NotFound` if `key` is not in the collection.
    pub fn toggle_complete(&self, key: TodoKey, completed: bool) -> TodoResult<()> {
        self.modify(key, |todo| todo.completed = completed)?;
        log::debug!("[STORE] Marked todo {} completed={}", key, completed);
        Ok(())
    }

    // ========================
    // Reads
    // ========================

    /// Owned copy of every record, in insertion order
    pub fn get_all(&self) -> Vec<(TodoKey, Todo)> {
        self.todos
            .borrow()
            .iter()
            .map(|(key, todo)| (*key, todo.clone()))
            .collect()
    }

    pub fn get(&self, key: TodoKey) -> Option<Todo> {
        self.todos.borrow().get(&key).cloned()
    }

    pub fn contains(&self, key: TodoKey) -> bool {
        self.todos.borrow().contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.todos.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.borrow().is_empty()
    }

    // ========================
    // Observer
    // ========================

    /// Register the change observer, replacing any previous one
    ///
    /// Only one observer is kept. Registering again silently drops the
    /// earlier callback.
    pub fn on_change(&self, observer: impl FnMut() + 'static) {
        if self.observer.replace(Some(Box::new(observer))).is_some() {
            log::debug!("[STORE] Replaced change observer");
        }
    }

    fn notify(&self) {
        // Detached while it runs: a mutation made from inside the observer is
        // applied but does not notify again.
        let Some(observer) = self.observer.take() else {
            return;
        };
        log::trace!("[STORE] Notifying observer ({} todos)", self.len());

        let mut reattach = Reattach {
            slot: &self.observer,
            observer: Some(observer),
        };
        if let Some(observer) = reattach.observer.as_mut() {
            observer();
        }
    }

    // ========================
    // Helpers
    // ========================

    fn allocate_key(&self) -> TodoResult<TodoKey> {
        let raw = self.next_key.get();
        let next = raw.checked_add(1).ok_or(TodoError::KeysExhausted)?;
        self.next_key.set(next);
        Ok(TodoKey::new(raw))
    }

    fn check_text(&self, text: &str) -> TodoResult<()> {
        if self.config.reject_blank_text && text.trim().is_empty() {
            return Err(TodoError::InvalidInput("todo text cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Apply `f` to the record under `key`, then notify
    fn modify(&self, key: TodoKey, f: impl FnOnce(&mut Todo)) -> TodoResult<()> {
        {
            let mut todos = self.todos.borrow_mut();
            let todo = todos.get_mut(&key).ok_or(TodoError::NotFound(key))?;
            f(todo);
        }
        self.notify();
        Ok(())
    }
}

/// Puts the detached observer back when notification ends, including by
/// unwinding out of a panicking observer
struct Reattach<'a> {
    slot: &'a Cell<Option<Observer>>,
    observer: Option<Observer>,
}

impl Drop for Reattach<'_> {
    fn drop(&mut self) {
        // The observer may have registered its own replacement.
        let replacement = self.slot.take();
        self.slot.set(replacement.or_else(|| self.observer.take()));
    }
}

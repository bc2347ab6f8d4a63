//! Store Errors

use crate::todo::TodoKey;

/// Result type for store operations
pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    /// Operation referenced a key that is not in the collection
    #[error("todo {0} not found")]
    NotFound(TodoKey),
    /// Text rejected by a store configured with `reject_blank_text`
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Every key the counter can produce has been handed out
    #[error("no todo keys left")]
    KeysExhausted,
}

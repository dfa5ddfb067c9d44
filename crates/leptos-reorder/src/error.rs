//! Reorder Errors
//!
//! Recoverable failures. Broken drag invariants are not errors, they panic.

use wasm_bindgen::JsValue;

/// Common result type for reorder operations
pub type ReorderResult<T> = Result<T, ReorderError>;

/// Errors surfaced to the host
#[derive(Debug, Clone, PartialEq)]
pub enum ReorderError {
    /// A browser API call failed
    Dom(String),
    /// Configuration could not be parsed or is out of range
    InvalidConfig(String),
}

impl ReorderError {
    pub(crate) fn dom(context: &str, err: JsValue) -> Self {
        ReorderError::Dom(format!("{}: {:?}", context, err))
    }
}

impl std::fmt::Display for ReorderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReorderError::Dom(msg) => write!(f, "DOM error: {}", msg),
            ReorderError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ReorderError {}

//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Uniqueness constraint on `(group, alias)` rejected a create.
    #[error("entry \"{alias}\" already exists in group \"{group}\"")]
    AlreadyExists { group: String, alias: String },

    #[error("entry \"{alias}\" not found in group \"{group}\"")]
    NotFound { group: String, alias: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Missing input detected while resolving a command. Returned as an outcome, never raised.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("alias required")]
    AliasRequired,

    #[error("code required")]
    CodeRequired,

    #[error("group required")]
    GroupRequired,
}

//! Error types for the model layer.
//!
//! # Design
//! The handler layer never matches on these variants — it maps any error to a
//! status code per operation and logs the Display form. The variants exist
//! for the store's own tests and for any future caller that does care.

use thiserror::Error;

/// Errors returned by `ListModel` operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A list with this name already exists (create, or rename target).
    #[error("ToDo list '{0}' already exists")]
    AlreadyExists(String),

    /// No list with this name exists.
    #[error("ToDo list '{0}' not found")]
    NotFound(String),
}

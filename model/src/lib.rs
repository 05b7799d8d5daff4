//! Model layer for the ToDo-list service.
//!
//! # Overview
//! Owns the `ToDoList` entity and its lifecycle. The HTTP layer talks to this
//! crate exclusively through the `ListModel` trait and treats every returned
//! value and error as opaque — it re-serializes lists verbatim and maps
//! presence-of-error to a status code without inspecting the variant.
//!
//! # Design
//! - `ListModel` is object-safe so the server can hold `Arc<dyn ListModel>`
//!   and tests can substitute a failing double.
//! - `MemoryStore` keeps lists in a `BTreeMap` keyed by name, so the list
//!   name is the lookup key and renaming moves the entry.
//! - `TaskNumber` is derived: it is the count of tasks the store holds for a
//!   list, never stored or settable directly.

pub mod error;
pub mod store;
pub mod types;

pub use error::ModelError;
pub use store::{ListModel, MemoryStore};
pub use types::ToDoList;

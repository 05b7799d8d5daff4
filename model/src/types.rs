//! Domain entity for the ToDo-list service.
//!
//! # Design
//! `ToDoList` is the value that crosses the model/HTTP boundary. It carries
//! the list's name and a derived task count; the handler layer serializes it
//! verbatim, so the serde field names are the wire format (`Name`,
//! `TaskNumber`).

use serde::{Deserialize, Serialize};

/// A named collection of tasks, as seen by the HTTP layer.
///
/// `task_number` is read-only from the caller's perspective — it reflects how
/// many tasks the store currently holds for the list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ToDoList {
    pub name: String,
    pub task_number: u64,
}

//! The `ListModel` trait and its in-memory implementation.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::ModelError;
use crate::types::ToDoList;

/// CRUD contract for ToDo lists.
///
/// Every operation returns either a populated entity (or collection) or an
/// error, never both. Mutating operations return the affected list's final
/// snapshot so callers can echo it back without a second lookup.
#[async_trait]
pub trait ListModel: Send + Sync {
    async fn create_todo_list(&self, name: &str) -> Result<ToDoList, ModelError>;
    async fn delete_todo_list(&self, name: &str) -> Result<ToDoList, ModelError>;
    async fn update_todo_list(&self, old_name: &str, new_name: &str)
        -> Result<ToDoList, ModelError>;
    async fn get_todo_list(&self, name: &str) -> Result<ToDoList, ModelError>;
    async fn get_all_todo_list(&self) -> Result<Vec<ToDoList>, ModelError>;
}

/// In-memory `ListModel` backed by a `BTreeMap` of list name to task titles.
///
/// The name is the lookup key, so renaming a list moves its entry (tasks
/// included). `get_all_todo_list` returns lists ordered by name.
#[derive(Debug, Default)]
pub struct MemoryStore {
    lists: RwLock<BTreeMap<String, Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task to an existing list. Not part of the HTTP surface; it
    /// exists so `TaskNumber` is a real derived count.
    pub async fn add_task(&self, list: &str, title: &str) -> Result<ToDoList, ModelError> {
        let mut lists = self.lists.write().await;
        let tasks = lists
            .get_mut(list)
            .ok_or_else(|| ModelError::NotFound(list.to_string()))?;
        tasks.push(title.to_string());
        Ok(snapshot(list, tasks))
    }
}

fn snapshot(name: &str, tasks: &[String]) -> ToDoList {
    ToDoList {
        name: name.to_string(),
        task_number: tasks.len() as u64,
    }
}

#[async_trait]
impl ListModel for MemoryStore {
    async fn create_todo_list(&self, name: &str) -> Result<ToDoList, ModelError> {
        let mut lists = self.lists.write().await;
        if lists.contains_key(name) {
            return Err(ModelError::AlreadyExists(name.to_string()));
        }
        lists.insert(name.to_string(), Vec::new());
        Ok(snapshot(name, &[]))
    }

    async fn delete_todo_list(&self, name: &str) -> Result<ToDoList, ModelError> {
        let mut lists = self.lists.write().await;
        let tasks = lists
            .remove(name)
            .ok_or_else(|| ModelError::NotFound(name.to_string()))?;
        Ok(snapshot(name, &tasks))
    }

    async fn update_todo_list(
        &self,
        old_name: &str,
        new_name: &str,
    ) -> Result<ToDoList, ModelError> {
        let mut lists = self.lists.write().await;
        if !lists.contains_key(old_name) {
            return Err(ModelError::NotFound(old_name.to_string()));
        }
        if old_name != new_name && lists.contains_key(new_name) {
            return Err(ModelError::AlreadyExists(new_name.to_string()));
        }
        let tasks = lists.remove(old_name).unwrap_or_default();
        let list = snapshot(new_name, &tasks);
        lists.insert(new_name.to_string(), tasks);
        Ok(list)
    }

    async fn get_todo_list(&self, name: &str) -> Result<ToDoList, ModelError> {
        let lists = self.lists.read().await;
        let tasks = lists
            .get(name)
            .ok_or_else(|| ModelError::NotFound(name.to_string()))?;
        Ok(snapshot(name, tasks))
    }

    async fn get_all_todo_list(&self) -> Result<Vec<ToDoList>, ModelError> {
        let lists = self.lists.read().await;
        Ok(lists
            .iter()
            .map(|(name, tasks)| snapshot(name, tasks))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_returns_empty_list() {
        let store = MemoryStore::new();
        let list = store.create_todo_list("Groceries").await.unwrap();
        assert_eq!(list.name, "Groceries");
        assert_eq!(list.task_number, 0);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name() {
        let store = MemoryStore::new();
        store.create_todo_list("Groceries").await.unwrap();
        let err = store.create_todo_list("Groceries").await.unwrap_err();
        assert_eq!(err, ModelError::AlreadyExists("Groceries".to_string()));
    }

    #[tokio::test]
    async fn delete_returns_final_snapshot() {
        let store = MemoryStore::new();
        store.create_todo_list("Errands").await.unwrap();
        store.add_task("Errands", "post office").await.unwrap();
        let deleted = store.delete_todo_list("Errands").await.unwrap();
        assert_eq!(deleted.task_number, 1);
        assert_eq!(
            store.get_todo_list("Errands").await.unwrap_err(),
            ModelError::NotFound("Errands".to_string())
        );
    }

    #[tokio::test]
    async fn delete_missing_list_fails_every_time() {
        let store = MemoryStore::new();
        for _ in 0..2 {
            let err = store.delete_todo_list("nope").await.unwrap_err();
            assert_eq!(err, ModelError::NotFound("nope".to_string()));
        }
    }

    #[tokio::test]
    async fn rename_moves_tasks_to_new_key() {
        let store = MemoryStore::new();
        store.create_todo_list("Old").await.unwrap();
        store.add_task("Old", "one").await.unwrap();
        store.add_task("Old", "two").await.unwrap();

        let renamed = store.update_todo_list("Old", "New").await.unwrap();
        assert_eq!(renamed.name, "New");
        assert_eq!(renamed.task_number, 2);

        assert!(store.get_todo_list("Old").await.is_err());
        assert_eq!(store.get_todo_list("New").await.unwrap().task_number, 2);
    }

    #[tokio::test]
    async fn rename_rejects_taken_name() {
        let store = MemoryStore::new();
        store.create_todo_list("A").await.unwrap();
        store.create_todo_list("B").await.unwrap();
        let err = store.update_todo_list("A", "B").await.unwrap_err();
        assert_eq!(err, ModelError::AlreadyExists("B".to_string()));
    }

    #[tokio::test]
    async fn rename_to_same_name_is_allowed() {
        let store = MemoryStore::new();
        store.create_todo_list("Same").await.unwrap();
        let list = store.update_todo_list("Same", "Same").await.unwrap();
        assert_eq!(list.name, "Same");
    }

    #[tokio::test]
    async fn get_all_is_ordered_by_name() {
        let store = MemoryStore::new();
        store.create_todo_list("b").await.unwrap();
        store.create_todo_list("a").await.unwrap();
        store.create_todo_list("c").await.unwrap();
        let names: Vec<String> = store
            .get_all_todo_list()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn add_task_bumps_derived_count() {
        let store = MemoryStore::new();
        store.create_todo_list("Chores").await.unwrap();
        store.add_task("Chores", "laundry").await.unwrap();
        let list = store.add_task("Chores", "dishes").await.unwrap();
        assert_eq!(list.task_number, 2);
    }

    #[tokio::test]
    async fn add_task_to_missing_list_fails() {
        let store = MemoryStore::new();
        let err = store.add_task("nope", "task").await.unwrap_err();
        assert_eq!(err, ModelError::NotFound("nope".to_string()));
    }
}

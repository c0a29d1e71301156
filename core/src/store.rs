//! Concurrent in-memory todo store.
//!
//! # Design
//! One `HashMap<Uuid, Todo>` behind `Arc<tokio::sync::RwLock>`. The store
//! is constructed once at startup and handed to the handler layer by
//! cloning the handle; the map itself is never shared outward. Reads
//! (`list`, `get`) take the read guard so any number may proceed together;
//! `create`, `update`, and `delete` take the write guard and exclude all
//! other operations for their duration. No guard is held across an await
//! point beyond the acquisition itself.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::Todo;

/// Handle to the process-wide todo collection.
///
/// Cloning is cheap and clones the handle, not the data.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    inner: Arc<RwLock<HashMap<Uuid, Todo>>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new todo with a fresh id, `completed = false`, and
    /// `created_at = now`. Returns the generated id.
    ///
    /// Rejects an empty title before touching the map, so a failed create
    /// leaves the store unchanged.
    pub async fn create(&self, title: &str) -> Result<Uuid, StoreError> {
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let todo = Todo {
            id: Uuid::new_v4(),
            title: title.to_string(),
            completed: false,
            created_at: Utc::now(),
        };
        let id = todo.id;
        self.inner.write().await.insert(id, todo);
        Ok(id)
    }

    /// Overwrite `title` and `completed` of an existing todo. `id` and
    /// `created_at` are preserved.
    ///
    /// The title check runs first; an unknown id with an empty title
    /// reports the validation error, matching the handler's 400-over-404
    /// precedence.
    pub async fn update(&self, id: Uuid, title: &str, completed: bool) -> Result<(), StoreError> {
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let mut todos = self.inner.write().await;
        let todo = todos.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        todo.title = title.to_string();
        todo.completed = completed;
        Ok(())
    }

    /// Snapshot copy of all current todos; order unspecified.
    pub async fn list(&self) -> Vec<Todo> {
        self.inner.read().await.values().cloned().collect()
    }

    /// Snapshot copy of a single todo, if present.
    pub async fn get(&self, id: Uuid) -> Option<Todo> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Remove a todo if present. Returns whether anything was removed;
    /// deleting an absent id is a no-op, not an error.
    pub async fn delete(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_returns_fresh_id_and_defaults() {
        let store = TodoStore::new();
        let id = store.create("Buy milk").await.unwrap();

        let todo = store.get(id).await.unwrap();
        assert_eq!(todo.id, id);
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
    }

    #[tokio::test]
    async fn create_empty_title_fails_without_mutating() {
        let store = TodoStore::new();
        let err = store.create("").await.unwrap_err();
        assert_eq!(err, StoreError::EmptyTitle);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn create_then_list_has_exactly_one_item() {
        let store = TodoStore::new();
        store.create("Walk dog").await.unwrap();

        let todos = store.list().await;
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Walk dog");
        assert!(!todos[0].completed);
    }

    #[tokio::test]
    async fn update_overwrites_fields_preserves_id_and_created_at() {
        let store = TodoStore::new();
        let id = store.create("Original").await.unwrap();
        let before = store.get(id).await.unwrap();

        store.update(id, "Renamed", true).await.unwrap();

        let after = store.get(id).await.unwrap();
        assert_eq!(after.id, id);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.title, "Renamed");
        assert!(after.completed);
    }

    #[tokio::test]
    async fn update_unknown_id_fails_without_mutating() {
        let store = TodoStore::new();
        store.create("Only one").await.unwrap();
        let missing = Uuid::new_v4();

        let err = store.update(missing, "Nope", true).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound(missing));

        let todos = store.list().await;
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Only one");
    }

    #[tokio::test]
    async fn update_empty_title_fails() {
        let store = TodoStore::new();
        let id = store.create("Keep me").await.unwrap();

        let err = store.update(id, "", true).await.unwrap_err();
        assert_eq!(err, StoreError::EmptyTitle);
        assert_eq!(store.get(id).await.unwrap().title, "Keep me");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = TodoStore::new();
        let id = store.create("Short-lived").await.unwrap();

        assert!(store.delete(id).await);
        assert!(!store.delete(id).await);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_a_noop() {
        let store = TodoStore::new();
        assert!(!store.delete(Uuid::new_v4()).await);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_creates_yield_distinct_ids() {
        let store = TodoStore::new();

        let mut handles = Vec::new();
        for i in 0..100 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create(&format!("todo {i}")).await.unwrap()
            }));
        }

        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }

        let todos = store.list().await;
        assert_eq!(todos.len(), 100);
        for todo in todos {
            assert!(ids.contains(&todo.id));
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_readers_and_writers_settle() {
        let store = TodoStore::new();
        let id = store.create("contended").await.unwrap();

        let mut handles = Vec::new();
        for i in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                if i % 2 == 0 {
                    store.update(id, "contended", i % 4 == 0).await.unwrap();
                } else {
                    assert!(!store.list().await.is_empty());
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.get(id).await.unwrap().title, "contended");
    }
}

//! Domain record and request DTOs for the todo service.
//!
//! # Design
//! `Todo` is the authoritative record shape; `CreateTodo` and `UpdateTodo`
//! describe the JSON request bodies. Wire fields a client may omit carry
//! `#[serde(default)]`, so a missing field deserializes to its zero value
//! and the empty-title validation in the store covers both the "absent"
//! and "empty" cases with the same error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item as stored and as returned by the API.
///
/// `id` and `created_at` are assigned at creation and never change;
/// `created_at` serializes as an RFC 3339 string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: String,
}

/// Request payload for replacing a todo's mutable fields. Both fields are
/// overwritten; a missing `completed` means false, as in a full PUT.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

//! Error type for store operations.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the handler layer maps it to
//! a different HTTP status than validation failures. Delete is idempotent
//! and never produces an error at all.

use thiserror::Error;
use uuid::Uuid;

/// Errors returned by [`TodoStore`](crate::TodoStore) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The title was missing or empty.
    #[error("the title field is required")]
    EmptyTitle,

    /// No todo exists under the given id.
    #[error("todo {0} not found")]
    NotFound(Uuid),
}

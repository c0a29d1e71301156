//! In-memory todo store for the todo HTTP service.
//!
//! # Overview
//! Owns the domain types and the concurrent store; carries no HTTP
//! dependencies. The server crate constructs one [`TodoStore`] at startup
//! and passes cloned handles into its handlers.
//!
//! # Design
//! - `TodoStore` wraps the map in `Arc<tokio::sync::RwLock>`: concurrent
//!   readers, exclusive writers, one lock acquisition per operation.
//! - Request DTOs live here next to the record type; integration tests in
//!   the server crate catch any schema drift at the HTTP boundary.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::{CreateTodo, Todo, UpdateTodo};

//! HTTP layer for the todo service.
//!
//! # Overview
//! Builds the axum router over a [`TodoStore`] handle and translates store
//! results into the service's JSON envelopes. The store is constructed by
//! the caller and injected via router state; handlers borrow it only for
//! the duration of a request.
//!
//! # Routes
//! - `GET  /`            — embedded static home page
//! - `GET  /todo/`       — `{"data": [Todo, ...]}`
//! - `POST /todo/`       — create, 201 `{"message", "todo_id"}`
//! - `PUT  /todo/{id}`   — update title + completed
//! - `DELETE /todo/{id}` — idempotent delete, always 200
//!
//! Malformed id path segments are rejected with 400 by the `Path<Uuid>`
//! extractor; missing or empty titles map to 400, unknown update ids to
//! 404.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use todo_store::{CreateTodo, StoreError, TodoStore, UpdateTodo};
use tower_http::trace::TraceLayer;
use tracing::debug;
use uuid::Uuid;

const HOME_PAGE: &str = include_str!("../static/home.html");

pub fn app(store: TodoStore) -> Router {
    Router::new()
        .route("/", get(home))
        .merge(todo_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

fn todo_routes() -> Router<TodoStore> {
    Router::new()
        .route("/todo/", get(list_todos).post(create_todo))
        .route(
            "/todo/{id}",
            axum::routing::put(update_todo).delete(delete_todo),
        )
}

async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

async fn list_todos(State(store): State<TodoStore>) -> Json<Value> {
    Json(json!({ "data": store.list().await }))
}

async fn create_todo(
    State(store): State<TodoStore>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let id = store.create(&input.title).await.map_err(error_response)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Todo created successfully",
            "todo_id": id,
        })),
    ))
}

async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    store
        .update(id, &input.title, input.completed)
        .await
        .map_err(error_response)?;
    Ok(Json(json!({ "message": "Todo updated successfully" })))
}

async fn delete_todo(State(store): State<TodoStore>, Path(id): Path<Uuid>) -> Json<Value> {
    if !store.delete(id).await {
        debug!(%id, "delete of absent todo");
    }
    Json(json!({ "message": "Todo deleted successfully" }))
}

/// Map store failures onto the wire: validation → 400, unknown id → 404.
fn error_response(err: StoreError) -> (StatusCode, Json<Value>) {
    match err {
        StoreError::EmptyTitle => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "The title field is required" })),
        ),
        StoreError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Failed to update todo" })),
        ),
    }
}

//! HTTP surface for the ToDo-list service.
//!
//! # Overview
//! Five handlers, one per CRUD operation on ToDo lists, each doing the same
//! four steps: extract and validate inputs, call the model, map the outcome
//! to a status code, and emit one structured log line. Handlers are stateless
//! and independent; the only shared state is the model behind an `Arc`.
//!
//! # Design
//! - Success bodies are the model's value serialized verbatim as JSON, no
//!   envelope. Error bodies are short plain-text strings, never JSON.
//! - 400 means the input was bad before any model call, 404 means the model
//!   could not resolve a named list, 422 means the bulk retrieval failed.
//! - The model is a trait object so tests can swap in a failing double.

pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use todolist_model::ListModel;

/// The model handle shared by all handlers.
pub type SharedModel = Arc<dyn ListModel>;

/// Build the router, binding each operation to its method and path.
pub fn app(model: SharedModel) -> Router {
    Router::new()
        .route("/lists/", post(handlers::create_list).get(handlers::get_all_lists))
        .route(
            "/lists/{list}/",
            get(handlers::get_list)
                .put(handlers::update_list)
                .delete(handlers::delete_list),
        )
        .with_state(model)
}

/// Serve the app on the given listener until the server shuts down.
pub async fn run(listener: TcpListener, model: SharedModel) -> Result<(), std::io::Error> {
    axum::serve(listener, app(model)).await
}

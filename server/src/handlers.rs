//! Request handlers for the five ToDo-list operations.
//!
//! # Design
//! Body-carrying handlers take the raw body as a `String` and decode it
//! themselves: a body that fails to decode, omits `Name`, or carries an empty
//! `Name` must all land on the same 400 path with the same message, which the
//! framework's built-in JSON rejection would not give us. Validation always
//! runs before the model call, so a 400 guarantees the model was never
//! touched. Every handler logs exactly once, on both paths; logging never
//! feeds back into the HTTP outcome.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use todolist_model::ToDoList;
use tracing::{error, info};

use crate::SharedModel;

/// Request envelope for create and update. `Name` is the only recognized
/// field; a missing field decodes to the empty string and is rejected the
/// same way a decode failure is.
#[derive(Debug, Deserialize)]
struct ListName {
    #[serde(rename = "Name", default)]
    name: String,
}

/// Decode the request body, treating decode failure and an empty name alike.
fn body_name(body: &str) -> Option<String> {
    serde_json::from_str::<ListName>(body)
        .ok()
        .map(|req| req.name)
        .filter(|name| !name.is_empty())
}

/// `POST /lists/` with body `{"Name": "<list>"}`.
pub async fn create_list(
    State(model): State<SharedModel>,
    body: String,
) -> Result<Json<ToDoList>, (StatusCode, String)> {
    let Some(name) = body_name(&body) else {
        error!("create: bad request, missing ToDo list name");
        return Err((
            StatusCode::BAD_REQUEST,
            "Missing ToDo list name".to_string(),
        ));
    };

    match model.create_todo_list(&name).await {
        Ok(list) => {
            info!(list = %list.name, "create: new ToDo list created");
            Ok(Json(list))
        }
        Err(err) => {
            error!(list = %name, error = %err, "create: error while creating ToDo list");
            Err((
                StatusCode::BAD_REQUEST,
                format!("Error while creating ToDo list '{name}'"),
            ))
        }
    }
}

/// `DELETE /lists/{list}/`.
pub async fn delete_list(
    State(model): State<SharedModel>,
    Path(list): Path<String>,
) -> Result<Json<ToDoList>, (StatusCode, String)> {
    if list.is_empty() {
        error!("delete: bad request, null list name");
        return Err((
            StatusCode::BAD_REQUEST,
            "Missing ToDo list name".to_string(),
        ));
    }

    match model.delete_todo_list(&list).await {
        Ok(deleted) => {
            info!(list = %deleted.name, tasks = deleted.task_number, "delete: ToDo list deleted");
            Ok(Json(deleted))
        }
        Err(err) => {
            error!(list = %list, error = %err, "delete: error while deleting ToDo list");
            Err((
                StatusCode::NOT_FOUND,
                format!("Error while deleting ToDo list {list}"),
            ))
        }
    }
}

/// `PUT /lists/{list}/` with body `{"Name": "<new name>"}`.
pub async fn update_list(
    State(model): State<SharedModel>,
    Path(list): Path<String>,
    body: String,
) -> Result<Json<ToDoList>, (StatusCode, String)> {
    let new_name = match body_name(&body) {
        Some(name) if !list.is_empty() => name,
        _ => {
            error!("update: bad request, no list name provided");
            return Err((
                StatusCode::BAD_REQUEST,
                "Missing ToDo list name or new list name".to_string(),
            ));
        }
    };

    match model.update_todo_list(&list, &new_name).await {
        Ok(updated) => {
            info!(list = %updated.name, tasks = updated.task_number, "update: ToDo list renamed");
            Ok(Json(updated))
        }
        Err(err) => {
            error!(list = %list, error = %err, "update: error while updating ToDo list");
            Err((StatusCode::NOT_FOUND, "ToDo list not found".to_string()))
        }
    }
}

/// `GET /lists/{list}/`.
pub async fn get_list(
    State(model): State<SharedModel>,
    Path(list): Path<String>,
) -> Result<Json<ToDoList>, (StatusCode, String)> {
    if list.is_empty() {
        error!("get: bad request, no list name provided");
        return Err((
            StatusCode::BAD_REQUEST,
            "Missing ToDo list name".to_string(),
        ));
    }

    match model.get_todo_list(&list).await {
        Ok(found) => {
            info!(list = %found.name, tasks = found.task_number, "get: retrieved ToDo list");
            Ok(Json(found))
        }
        Err(err) => {
            error!(list = %list, error = %err, "get: error while retrieving ToDo list");
            Err((StatusCode::NOT_FOUND, "ToDo list not found".to_string()))
        }
    }
}

/// `GET /lists/`.
pub async fn get_all_lists(
    State(model): State<SharedModel>,
) -> Result<Json<Vec<ToDoList>>, (StatusCode, String)> {
    match model.get_all_todo_list().await {
        Ok(lists) => {
            info!(count = lists.len(), "get_all: retrieved ToDo lists");
            Ok(Json(lists))
        }
        Err(err) => {
            error!(error = %err, "get_all: error while retrieving ToDo lists");
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                "Error while retrieving ToDo list".to_string(),
            ))
        }
    }
}

/// Todo route handlers
///
/// The todo collection lives at the root path. Responses carry
/// `TodoResource` bodies in which each todo is identified by an absolute
/// `url` derived from the incoming request rather than by a bare id.
///
/// Path ids arrive as raw strings and are parsed inside the handlers, so a
/// request like `GET /abc` fails on the same 500 path as a database error
/// instead of being rejected by the router.
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use todoboard_shared::models::{CreateTodo, Todo, TodoResource, TodoStatus, UpdateTodo};

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use crate::extract::BaseUrl;

/// Request body for creating a todo.
///
/// There is deliberately no `status` field: new todos always start in the
/// `todo` column, and any status sent by the client is ignored.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub order: Option<i32>,
}

/// Request body for partially updating a todo. Absent fields keep their
/// stored values.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub order: Option<i32>,
    pub status: Option<TodoStatus>,
}

/// GET / - List all todos
pub async fn list_todos(
    State(state): State<AppState>,
    BaseUrl(base_url): BaseUrl,
) -> ApiResult<Json<Vec<TodoResource>>> {
    let todos = Todo::all(&state.db)
        .await
        .map_err(ApiError::internal("Could not fetch all todos"))?;

    let resources = todos
        .into_iter()
        .map(|todo| todo.into_resource(&base_url))
        .collect();

    Ok(Json(resources))
}

/// GET /:id - Fetch a single todo
///
/// A missing todo is not an error; the body is JSON `null`.
pub async fn get_todo(
    State(state): State<AppState>,
    BaseUrl(base_url): BaseUrl,
    Path(id): Path<String>,
) -> ApiResult<Json<Option<TodoResource>>> {
    let id = id
        .parse::<i32>()
        .map_err(ApiError::internal("Could not fetch todo"))?;

    let todo = Todo::find_by_id(&state.db, id)
        .await
        .map_err(ApiError::internal("Could not fetch todo"))?;

    Ok(Json(todo.map(|todo| todo.into_resource(&base_url))))
}

/// POST / - Create a todo
pub async fn create_todo(
    State(state): State<AppState>,
    BaseUrl(base_url): BaseUrl,
    Json(request): Json<CreateTodoRequest>,
) -> ApiResult<Json<TodoResource>> {
    let todo = Todo::create(
        &state.db,
        CreateTodo {
            title: request.title,
            order: request.order,
        },
    )
    .await
    .map_err(ApiError::internal("Could not post todo"))?;

    Ok(Json(todo.into_resource(&base_url)))
}

/// PATCH /:id - Partially update a todo
///
/// # Errors
///
/// Patching a todo that does not exist, or sending a body with no
/// recognized fields, fails on the 500 path.
pub async fn update_todo(
    State(state): State<AppState>,
    BaseUrl(base_url): BaseUrl,
    Path(id): Path<String>,
    Json(request): Json<UpdateTodoRequest>,
) -> ApiResult<Json<TodoResource>> {
    let id = id
        .parse::<i32>()
        .map_err(ApiError::internal("Could not patch todo"))?;

    let todo = Todo::update(
        &state.db,
        id,
        UpdateTodo {
            title: request.title,
            order: request.order,
            status: request.status,
        },
    )
    .await
    .map_err(ApiError::internal("Could not patch todo"))?
    .ok_or_else(|| ApiError::Internal {
        context: "Could not patch todo",
        source: anyhow::anyhow!("todo {} does not exist", id),
    })?;

    Ok(Json(todo.into_resource(&base_url)))
}

/// DELETE / - Delete every todo
///
/// Responds with the removed todos.
pub async fn clear_todos(
    State(state): State<AppState>,
    BaseUrl(base_url): BaseUrl,
) -> ApiResult<Json<Vec<TodoResource>>> {
    let removed = Todo::clear(&state.db)
        .await
        .map_err(ApiError::internal("Could not delete all todos"))?;

    let resources = removed
        .into_iter()
        .map(|todo| todo.into_resource(&base_url))
        .collect();

    Ok(Json(resources))
}

/// DELETE /:id - Delete a single todo
///
/// Responds with the removed todo; deleting a todo that does not exist
/// fails on the 500 path.
pub async fn delete_todo(
    State(state): State<AppState>,
    BaseUrl(base_url): BaseUrl,
    Path(id): Path<String>,
) -> ApiResult<Json<TodoResource>> {
    let id = id
        .parse::<i32>()
        .map_err(ApiError::internal("Could not delete todo"))?;

    let todo = Todo::delete(&state.db, id)
        .await
        .map_err(ApiError::internal("Could not delete todo"))?
        .ok_or_else(|| ApiError::Internal {
            context: "Could not delete todo",
            source: anyhow::anyhow!("todo {} does not exist", id),
        })?;

    Ok(Json(todo.into_resource(&base_url)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_ignores_status_field() {
        let request: CreateTodoRequest =
            serde_json::from_value(json!({"title": "walk the dog", "order": 1, "status": 2}))
                .unwrap();
        assert_eq!(request.title.as_deref(), Some("walk the dog"));
        assert_eq!(request.order, Some(1));
    }

    #[test]
    fn test_create_request_allows_empty_body() {
        let request: CreateTodoRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.title.is_none());
        assert!(request.order.is_none());
    }

    #[test]
    fn test_update_request_is_partial() {
        let request: UpdateTodoRequest = serde_json::from_value(json!({"status": 1})).unwrap();
        assert!(request.title.is_none());
        assert!(request.order.is_none());
        assert_eq!(request.status, Some(TodoStatus::Doing));
    }

    #[test]
    fn test_update_request_rejects_out_of_range_status() {
        let result = serde_json::from_value::<UpdateTodoRequest>(json!({"status": 9}));
        assert!(result.is_err());
    }
}

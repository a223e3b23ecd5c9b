/// Assignment route handlers
///
/// Dashboard clients send ids either as JSON numbers or as strings
/// depending on where the value came from, so the assign endpoint accepts
/// both. Assignment mutations collapse every failure, including ids that
/// do not parse and inserts that trip a foreign key, into the single
/// `404 {"error": "Todo not found"}` response.
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use todoboard_shared::models::{Assignment, CreateAssignment};

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};

/// An id that may arrive as a JSON number or a numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Int(i32),
    Text(String),
}

impl ResourceId {
    /// Returns the numeric id, or `None` when a string form does not parse.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            ResourceId::Int(id) => Some(*id),
            ResourceId::Text(raw) => raw.parse().ok(),
        }
    }
}

/// Request body for assigning a todo to a user
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTodoRequest {
    pub user_id: ResourceId,
    pub todo_id: ResourceId,
}

/// Response body for a successful assignment
#[derive(Debug, Serialize)]
pub struct AssignResponse {
    pub message: String,
    pub assignee: Assignment,
}

/// Response body for an unassignment; `result` is omitted when no
/// assignment row matched.
#[derive(Debug, Serialize)]
pub struct UnassignResponse {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Assignment>,
}

/// Response body for the assignee listing
#[derive(Debug, Serialize)]
pub struct AssigneesResponse {
    pub users: Vec<Assignment>,
}

/// GET /todos/:todo_id/assignees - List the assignments for a todo
pub async fn list_assignees(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> ApiResult<(StatusCode, Json<AssigneesResponse>)> {
    let todo_id = todo_id
        .parse::<i32>()
        .map_err(ApiError::internal("Could not get assigned users"))?;

    let users = Assignment::list_for_todo(&state.db, todo_id)
        .await
        .map_err(ApiError::internal("Could not get assigned users"))?;

    Ok((StatusCode::CREATED, Json(AssigneesResponse { users })))
}

/// POST /assign-todo - Assign a todo to a user
pub async fn assign_todo(
    State(state): State<AppState>,
    Json(request): Json<AssignTodoRequest>,
) -> ApiResult<(StatusCode, Json<AssignResponse>)> {
    let user_id = request.user_id.as_i32().ok_or(ApiError::AssignmentNotFound)?;
    let todo_id = request.todo_id.as_i32().ok_or(ApiError::AssignmentNotFound)?;

    let assignee = Assignment::create(&state.db, CreateAssignment { user_id, todo_id })
        .await
        .map_err(|error| {
            tracing::debug!("Assignment insert failed: {}", error);
            ApiError::AssignmentNotFound
        })?;

    Ok((
        StatusCode::CREATED,
        Json(AssignResponse {
            message: "Todo assigned successfully".to_string(),
            assignee,
        }),
    ))
}

/// DELETE /delete-assign/:user_id/:todo_id - Remove an assignment
///
/// Removing an assignment that does not exist still responds `201`; the
/// body simply has no `result` field.
pub async fn unassign_todo(
    State(state): State<AppState>,
    Path((user_id, todo_id)): Path<(String, String)>,
) -> ApiResult<(StatusCode, Json<UnassignResponse>)> {
    let user_id = user_id
        .parse::<i32>()
        .map_err(|_| ApiError::AssignmentNotFound)?;
    let todo_id = todo_id
        .parse::<i32>()
        .map_err(|_| ApiError::AssignmentNotFound)?;

    let result = Assignment::delete(&state.db, user_id, todo_id)
        .await
        .map_err(|error| {
            tracing::debug!("Assignment delete failed: {}", error);
            ApiError::AssignmentNotFound
        })?;

    Ok((
        StatusCode::CREATED,
        Json(UnassignResponse {
            message: "Todo assignee deleted successfully".to_string(),
            result,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assign_request_accepts_numeric_ids() {
        let request: AssignTodoRequest =
            serde_json::from_value(json!({"userId": 2, "todoId": 7})).unwrap();
        assert_eq!(request.user_id.as_i32(), Some(2));
        assert_eq!(request.todo_id.as_i32(), Some(7));
    }

    #[test]
    fn test_assign_request_accepts_string_ids() {
        let request: AssignTodoRequest =
            serde_json::from_value(json!({"userId": "2", "todoId": "7"})).unwrap();
        assert_eq!(request.user_id.as_i32(), Some(2));
        assert_eq!(request.todo_id.as_i32(), Some(7));
    }

    #[test]
    fn test_non_numeric_string_id_yields_none() {
        let request: AssignTodoRequest =
            serde_json::from_value(json!({"userId": "abc", "todoId": 1})).unwrap();
        assert_eq!(request.user_id.as_i32(), None);
        assert_eq!(request.todo_id.as_i32(), Some(1));
    }

    #[test]
    fn test_unassign_response_omits_missing_result() {
        let response = UnassignResponse {
            message: "Todo assignee deleted successfully".to_string(),
            result: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"message":"Todo assignee deleted successfully"}"#);
    }
}

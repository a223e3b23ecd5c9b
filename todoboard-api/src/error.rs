/// API error types and HTTP response conversion
///
/// The wire contract distinguishes three shapes:
///
/// - Registration failures return `400` with a JSON `{"error": "..."}` body
///   carrying the provider or validation message verbatim.
/// - Assignment mutations collapse every failure into `404` with a JSON
///   `{"error": "Todo not found"}` body.
/// - Everything else is a `500` with a plain-text `Oops! {context}.` body;
///   the underlying cause is logged but never sent to the client.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result alias for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can be returned to API clients
#[derive(Debug)]
pub enum ApiError {
    /// Registration was rejected; the message is sent to the client
    Registration(String),

    /// An assignment endpoint could not complete
    AssignmentNotFound,

    /// An unexpected failure; only the context line reaches the client
    Internal {
        context: &'static str,
        source: anyhow::Error,
    },
}

/// JSON body for client-visible errors
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    /// Returns a `map_err` adapter that tags any error with the given
    /// context line and routes it onto the 500 path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use todoboard_api::error::{ApiError, ApiResult};
    /// # async fn demo(pool: sqlx::PgPool) -> ApiResult<Vec<todoboard_shared::models::Todo>> {
    /// use todoboard_shared::models::Todo;
    ///
    /// let todos = Todo::all(&pool)
    ///     .await
    ///     .map_err(ApiError::internal("Could not fetch all todos"))?;
    /// # Ok(todos)
    /// # }
    /// ```
    pub fn internal<E>(context: &'static str) -> impl FnOnce(E) -> ApiError
    where
        E: Into<anyhow::Error>,
    {
        move |source| ApiError::Internal {
            context,
            source: source.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Registration(message) => write!(f, "Registration failed: {}", message),
            ApiError::AssignmentNotFound => write!(f, "Todo not found"),
            ApiError::Internal { context, .. } => write!(f, "{}", context),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Internal { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Registration(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: message }),
            )
                .into_response(),
            ApiError::AssignmentNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Todo not found".to_string(),
                }),
            )
                .into_response(),
            ApiError::Internal { context, source } => {
                tracing::error!("{}: {:?}", context, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Oops! {}.", context),
                )
                    .into_response()
            }
        }
    }
}

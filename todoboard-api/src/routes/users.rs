/// User route handlers
///
/// Registration is delegated to the configured identity provider: the
/// provider account is created first, and only a provider success is
/// followed by the local insert. A request that fails validation never
/// reaches the provider, so a malformed registration cannot leave a
/// stray provider account behind.
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use todoboard_shared::auth::NewAccount;
use todoboard_shared::models::{CreateUser, User};
use validator::Validate;

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};

/// Request body for registration
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required(message = "Name is required"))]
    pub name: Option<String>,

    #[validate(
        required(message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: Option<String>,

    #[validate(required(message = "Password is required"))]
    pub password: Option<String>,
}

/// Response body for a successful registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub result: User,
}

/// Response body for the user listing
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    #[serde(rename = "allUsers")]
    pub all_users: Vec<User>,
}

/// GET /users - List all registered users
pub async fn list_users(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<UsersResponse>)> {
    let users = User::all(&state.db)
        .await
        .map_err(ApiError::internal("Could not retrieve users"))?;

    Ok((StatusCode::CREATED, Json(UsersResponse { all_users: users })))
}

/// POST /create-user - Register a new user
///
/// # Errors
///
/// Validation failures, provider rejections, and insert failures all
/// surface as `400` with the failure message in the body.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    request
        .validate()
        .map_err(|errors| ApiError::Registration(validation_message(&errors)))?;

    // validate() has already established that all three fields are present
    let name = request.name.unwrap_or_default();
    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    let account = state
        .identity
        .create_account(NewAccount {
            email: email.clone(),
            password,
            display_name: name.clone(),
        })
        .await
        .map_err(|error| ApiError::Registration(error.to_string()))?;

    tracing::info!(
        provider = state.identity.name(),
        uid = %account.uid,
        "Identity provider account created"
    );

    let user = User::create(&state.db, CreateUser { name, email })
        .await
        .map_err(|error| ApiError::Registration(error.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            result: user,
        }),
    ))
}

/// Flattens validation errors into a single client-facing message. Field
/// order in `ValidationErrors` is unstable, so messages are sorted.
fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .filter_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .collect();
    messages.sort();

    if messages.is_empty() {
        "Invalid registration request".to_string()
    } else {
        messages.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_requires_all_fields() {
        let request = RegisterRequest {
            name: None,
            email: None,
            password: None,
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(
            validation_message(&errors),
            "Email is required, Name is required, Password is required"
        );
    }

    #[test]
    fn test_register_request_rejects_invalid_email() {
        let request = RegisterRequest {
            name: Some("Geraldine".to_string()),
            email: Some("not-an-email".to_string()),
            password: Some("hunter22".to_string()),
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(validation_message(&errors), "Invalid email format");
    }

    #[test]
    fn test_register_request_accepts_valid_input() {
        let request = RegisterRequest {
            name: Some("Geraldine".to_string()),
            email: Some("geraldine@example.com".to_string()),
            password: Some("hunter22".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_users_response_envelope_key() {
        let response = UsersResponse { all_users: vec![] };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"allUsers":[]}"#);
    }
}

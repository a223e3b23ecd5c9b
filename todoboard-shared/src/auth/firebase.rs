/// Firebase identity provider
///
/// This module implements [`IdentityProvider`] against the Google Identity
/// Toolkit REST API, which backs Firebase Authentication.
///
/// # Endpoint
///
/// ```text
/// POST {auth_url}/v1/accounts:signUp?key={api_key}
/// { "email": "...", "password": "...", "displayName": "...", "returnSecureToken": false }
/// ```
///
/// On rejection the API answers with a JSON body of the form
/// `{"error": {"message": "EMAIL_EXISTS", ...}}`; that message is surfaced
/// verbatim as `ProviderError::Rejected`.
///
/// The HTTP client carries a request timeout so a stalled provider cannot
/// hold registration requests open indefinitely.
///
/// # Example
///
/// ```no_run
/// use todoboard_shared::auth::{FirebaseAuth, FirebaseConfig, IdentityProvider, NewAccount};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = FirebaseAuth::new(FirebaseConfig {
///     api_key: std::env::var("FIREBASE_API_KEY")?,
///     ..Default::default()
/// })?;
///
/// let account = provider.create_account(NewAccount {
///     email: "ada@example.com".to_string(),
///     password: "correct horse battery staple".to_string(),
///     display_name: "Ada Lovelace".to_string(),
/// }).await?;
/// # Ok(())
/// # }
/// ```

use crate::auth::provider::{
    IdentityProvider, NewAccount, ProviderAccount, ProviderError, ProviderResult,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the Firebase provider
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    /// Base URL of the Identity Toolkit API
    ///
    /// Point this at the Firebase Auth emulator in development.
    pub auth_url: String,

    /// Web API key of the Firebase project
    pub api_key: String,

    /// Request timeout (seconds)
    pub timeout_seconds: u64,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            auth_url: "https://identitytoolkit.googleapis.com".to_string(),
            api_key: String::new(),
            timeout_seconds: 10,
        }
    }
}

/// Firebase provider implementation
pub struct FirebaseAuth {
    http: reqwest::Client,
    auth_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    display_name: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignUpResponse {
    local_id: String,
    email: String,
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Extracts the provider's rejection message from an error response body
///
/// Falls back to a status-based message when the body is not the expected
/// `{"error": {"message": ...}}` shape.
fn rejection_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => format!("identity provider returned status {}", status),
    }
}

impl FirebaseAuth {
    /// Creates a Firebase provider from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(config: FirebaseConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            auth_url: config.auth_url,
            api_key: config.api_key,
        })
    }
}

#[async_trait]
impl IdentityProvider for FirebaseAuth {
    fn name(&self) -> &str {
        "firebase"
    }

    async fn create_account(&self, account: NewAccount) -> ProviderResult<ProviderAccount> {
        debug!(email = %account.email, "Creating Firebase account");

        let url = format!("{}/v1/accounts:signUp?key={}", self.auth_url, self.api_key);

        let response = self
            .http
            .post(&url)
            .json(&SignUpRequest {
                email: &account.email,
                password: &account.password,
                display_name: &account.display_name,
                return_secure_token: false,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = rejection_message(status.as_u16(), &body);
            warn!(email = %account.email, %message, "Firebase rejected account creation");
            return Err(ProviderError::Rejected(message));
        }

        let created: SignUpResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::Invalid(e.to_string()))?;

        debug!(email = %created.email, uid = %created.local_id, "Firebase account created");

        Ok(ProviderAccount {
            uid: created.local_id,
            email: created.email,
            display_name: created.display_name,
        })
    }
}

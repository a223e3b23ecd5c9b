/// Core IdentityProvider trait and types
///
/// This module defines the contract every identity provider must implement.
/// Providers own account credentials; the API server only ever hands them a
/// candidate email/password and records the outcome.
///
/// # Provider Contract
///
/// All providers must:
/// 1. Implement the `IdentityProvider` trait (async)
/// 2. Create the remote account before returning success
/// 3. Report rejections (duplicate email, weak password, ...) as
///    `ProviderError::Rejected` with the provider's own message
/// 4. Never log or persist the plaintext password
///
/// # Example
///
/// ```no_run
/// use todoboard_shared::auth::{IdentityProvider, NewAccount, ProviderAccount, ProviderResult};
/// use async_trait::async_trait;
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl IdentityProvider for MyProvider {
///     fn name(&self) -> &str {
///         "my_provider"
///     }
///
///     async fn create_account(&self, account: NewAccount) -> ProviderResult<ProviderAccount> {
///         Ok(ProviderAccount {
///             uid: "remote-uid".to_string(),
///             email: account.email,
///             display_name: Some(account.display_name),
///         })
///     }
/// }
/// ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Identity provider error types
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider refused to create the account
    ///
    /// Carries the provider's own message (e.g. "EMAIL_EXISTS") verbatim so
    /// callers can surface it to the registering client.
    #[error("{0}")]
    Rejected(String),

    /// The provider could not be reached
    #[error("identity provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with something we could not interpret
    #[error("unexpected identity provider response: {0}")]
    Invalid(String),
}

/// Provider result type alias
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Candidate account submitted for registration
///
/// The password travels to the provider and nowhere else.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Email address for the new account
    pub email: String,

    /// Plaintext password, forwarded to the provider over TLS
    pub password: String,

    /// Display name attached to the provider account
    pub display_name: String,
}

/// Account as created by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderAccount {
    /// Provider-assigned account id
    pub uid: String,

    /// Email address the provider registered
    pub email: String,

    /// Display name, if the provider recorded one
    pub display_name: Option<String>,
}

/// Core IdentityProvider trait
///
/// The API server holds a provider as a trait object so tests can swap in
/// the mock without touching handler code.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the provider name
    ///
    /// Used for logging.
    fn name(&self) -> &str;

    /// Creates an account with the provider
    ///
    /// # Returns
    ///
    /// The created account on success
    ///
    /// # Errors
    ///
    /// - `ProviderError::Rejected` when the provider refuses the credentials
    /// - `ProviderError::Transport` when the provider cannot be reached
    /// - `ProviderError::Invalid` when the response cannot be interpreted
    async fn create_account(&self, account: NewAccount) -> ProviderResult<ProviderAccount>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_error_surfaces_provider_message() {
        let err = ProviderError::Rejected("EMAIL_EXISTS".to_string());
        assert_eq!(err.to_string(), "EMAIL_EXISTS");
    }

    #[test]
    fn test_invalid_error_display() {
        let err = ProviderError::Invalid("missing localId".to_string());
        assert_eq!(
            err.to_string(),
            "unexpected identity provider response: missing localId"
        );
    }

    #[test]
    fn test_new_account_struct() {
        let account = NewAccount {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            display_name: "Ada".to_string(),
        };
        assert_eq!(account.email, "ada@example.com");
        assert_eq!(account.display_name, "Ada");
    }
}

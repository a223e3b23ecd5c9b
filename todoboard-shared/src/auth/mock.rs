/// Mock identity provider for testing and local development
///
/// Keeps registered emails in memory and mimics the two provider behaviors
/// the API cares about: duplicate emails are rejected with the same
/// "EMAIL_EXISTS" message Firebase uses, and a `rejecting()` instance turns
/// every request down to simulate an unreachable or misbehaving provider.
///
/// # Example
///
/// ```no_run
/// use todoboard_shared::auth::{IdentityProvider, MockIdentityProvider, NewAccount};
///
/// # async fn example() {
/// let provider = MockIdentityProvider::new();
///
/// let first = provider.create_account(NewAccount {
///     email: "ada@example.com".to_string(),
///     password: "pw".to_string(),
///     display_name: "Ada".to_string(),
/// }).await;
/// assert!(first.is_ok());
/// # }
/// ```

use crate::auth::provider::{
    IdentityProvider, NewAccount, ProviderAccount, ProviderError, ProviderResult,
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

/// Mock provider implementation
pub struct MockIdentityProvider {
    emails: Mutex<HashSet<String>>,
    reject_all: bool,
}

impl MockIdentityProvider {
    /// Creates a mock provider that accepts new emails
    pub fn new() -> Self {
        MockIdentityProvider {
            emails: Mutex::new(HashSet::new()),
            reject_all: false,
        }
    }

    /// Creates a mock provider that rejects every request
    ///
    /// Simulates a provider outage for failure-path tests.
    pub fn rejecting() -> Self {
        MockIdentityProvider {
            emails: Mutex::new(HashSet::new()),
            reject_all: true,
        }
    }

    /// Checks whether an email was registered with this provider
    pub fn has_registered(&self, email: &str) -> bool {
        self.emails.lock().unwrap().contains(email)
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn create_account(&self, account: NewAccount) -> ProviderResult<ProviderAccount> {
        if self.reject_all {
            return Err(ProviderError::Rejected("PROVIDER_UNAVAILABLE".to_string()));
        }

        let mut emails = self.emails.lock().unwrap();
        if !emails.insert(account.email.clone()) {
            return Err(ProviderError::Rejected("EMAIL_EXISTS".to_string()));
        }

        Ok(ProviderAccount {
            uid: format!("mock-uid-{}", emails.len()),
            email: account.email,
            display_name: Some(account.display_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(email: &str) -> NewAccount {
        NewAccount {
            email: email.to_string(),
            password: "pw".to_string(),
            display_name: "Test".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_account_succeeds() {
        let provider = MockIdentityProvider::new();

        let created = provider.create_account(account("ada@example.com")).await.unwrap();
        assert_eq!(created.email, "ada@example.com");
        assert_eq!(created.display_name.as_deref(), Some("Test"));
        assert!(created.uid.starts_with("mock-uid-"));
        assert!(provider.has_registered("ada@example.com"));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let provider = MockIdentityProvider::new();

        provider.create_account(account("ada@example.com")).await.unwrap();
        let err = provider
            .create_account(account("ada@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "EMAIL_EXISTS");
    }

    #[tokio::test]
    async fn test_rejecting_provider_refuses_everything() {
        let provider = MockIdentityProvider::rejecting();

        let err = provider
            .create_account(account("ada@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "PROVIDER_UNAVAILABLE");
        assert!(!provider.has_registered("ada@example.com"));
    }

    #[test]
    fn test_provider_name() {
        let provider = MockIdentityProvider::new();
        assert_eq!(provider.name(), "mock");
    }
}

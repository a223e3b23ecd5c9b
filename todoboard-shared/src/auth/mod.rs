/// Identity provider integration
///
/// Registration is delegated to an external identity provider: credentials
/// never touch the local database. This module defines the provider
/// contract and two implementations.
///
/// # Provider Types
///
/// - **Firebase**: Google Identity Toolkit REST API (production)
/// - **Mock**: In-memory provider for tests and local development
///
/// # Registration Flow
///
/// ```text
/// validate request fields
///   └─> IdentityProvider::create_account()   (remote)
///         └─> User::create()                 (local row, only on success)
/// ```
///
/// The provider call always happens before the local insert, so a rejected
/// registration leaves no local row behind.
///
/// # Example
///
/// ```no_run
/// use todoboard_shared::auth::{IdentityProvider, MockIdentityProvider, NewAccount};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = MockIdentityProvider::new();
///
/// let account = provider.create_account(NewAccount {
///     email: "ada@example.com".to_string(),
///     password: "correct horse battery staple".to_string(),
///     display_name: "Ada Lovelace".to_string(),
/// }).await?;
///
/// println!("Provider uid: {}", account.uid);
/// # Ok(())
/// # }
/// ```

pub mod firebase;
pub mod mock;
pub mod provider;

// Re-export main types
pub use firebase::{FirebaseAuth, FirebaseConfig};
pub use mock::MockIdentityProvider;
pub use provider::{IdentityProvider, NewAccount, ProviderAccount, ProviderError, ProviderResult};

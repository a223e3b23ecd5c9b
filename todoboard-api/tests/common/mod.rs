/// Shared test infrastructure for integration tests
///
/// Tests run against the real Postgres database named in `DATABASE_URL`
/// and are skipped when that variable is unset. The todo collection is
/// global state, so all tests in this binary are serialized on one lock
/// and each context starts from wiped tables.
use std::sync::{Arc, OnceLock};

use axum::Router;
use sqlx::PgPool;
use todoboard_api::app::{build_router, AppState};
use todoboard_api::config::{ApiConfig, Config, DatabaseConfig, FirebaseConfig};
use todoboard_shared::auth::MockIdentityProvider;
use todoboard_shared::db::migrations::{ensure_database_exists, run_migrations};
use todoboard_shared::db::pool::{create_pool, DatabaseConfig as PoolConfig};
use tokio::sync::{Mutex, MutexGuard};

static TEST_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn test_lock() -> &'static Mutex<()> {
    TEST_LOCK.get_or_init(|| Mutex::new(()))
}

pub struct TestContext {
    pub db: PgPool,
    pub app: Router,
    pub identity: Arc<MockIdentityProvider>,
    _lock: MutexGuard<'static, ()>,
}

impl TestContext {
    /// Builds a context with a fresh mock identity provider, or returns
    /// `None` so the caller can skip when no database is configured.
    pub async fn try_new() -> anyhow::Result<Option<Self>> {
        Self::try_new_with(Arc::new(MockIdentityProvider::new())).await
    }

    /// Builds a context around the given identity provider.
    pub async fn try_new_with(
        identity: Arc<MockIdentityProvider>,
    ) -> anyhow::Result<Option<Self>> {
        let Ok(database_url) = std::env::var("DATABASE_URL") else {
            return Ok(None);
        };

        let lock = test_lock().lock().await;

        ensure_database_exists(&database_url).await?;

        let db = create_pool(PoolConfig {
            url: database_url.clone(),
            max_connections: 5,
            ..Default::default()
        })
        .await?;

        run_migrations(&db).await?;
        wipe(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections: 5,
            },
            firebase: FirebaseConfig {
                api_key: "test-key".to_string(),
                auth_url: "http://localhost:9099".to_string(),
                timeout_seconds: 5,
            },
        };

        let state = AppState::new(db.clone(), config, identity.clone());
        let app = build_router(state);

        Ok(Some(TestContext {
            db,
            app,
            identity,
            _lock: lock,
        }))
    }

    /// Removes every row the test created.
    pub async fn cleanup(&self) -> anyhow::Result<()> {
        wipe(&self.db).await
    }
}

async fn wipe(db: &PgPool) -> anyhow::Result<()> {
    sqlx::query("DELETE FROM todos_assignees").execute(db).await?;
    sqlx::query("DELETE FROM todos").execute(db).await?;
    sqlx::query("DELETE FROM users").execute(db).await?;
    Ok(())
}

/// Reads a response body as JSON.
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Reads a response body as text.
pub async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

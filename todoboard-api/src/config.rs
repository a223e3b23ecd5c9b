/// Configuration management for the Todoboard API server
///
/// All configuration is read from environment variables, with a `.env` file
/// loaded first when present. Only `DATABASE_URL` and `FIREBASE_API_KEY` are
/// required; everything else has a sensible default.
///
/// # Example
///
/// ```no_run
/// use todoboard_api::config::Config;
///
/// let config = Config::from_env().expect("Failed to load configuration");
/// println!("Listening on {}", config.bind_address());
/// ```
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    pub api: ApiConfig,

    /// Database connection settings
    pub database: DatabaseConfig,

    /// Identity provider settings for registration
    pub firebase: FirebaseConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind, e.g. "0.0.0.0"
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allowed CORS origins; a single "*" enables the permissive policy
    pub cors_origins: Vec<String>,
}

/// Database connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Postgres connection URL
    pub url: String,

    /// Maximum pool size
    pub max_connections: u32,
}

/// Identity provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebaseConfig {
    /// Web API key for the Firebase project
    pub api_key: String,

    /// Base URL of the Identity Toolkit endpoint
    pub auth_url: String,

    /// Request timeout for provider calls
    pub timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a numeric
    /// variable fails to parse.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("API_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("API_PORT must be a valid port number")?;

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .context("DATABASE_MAX_CONNECTIONS must be a number")?;

        let api_key =
            std::env::var("FIREBASE_API_KEY").context("FIREBASE_API_KEY must be set")?;
        let auth_url = std::env::var("FIREBASE_AUTH_URL")
            .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com".to_string());
        let timeout_seconds = std::env::var("FIREBASE_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .context("FIREBASE_TIMEOUT_SECONDS must be a number")?;

        Ok(Config {
            api: ApiConfig {
                host,
                port,
                cors_origins,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            firebase: FirebaseConfig {
                api_key,
                auth_url,
                timeout_seconds,
            },
        })
    }

    /// Returns the socket address string for the HTTP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }

    /// Returns true when CORS should allow any origin.
    pub fn cors_allow_any(&self) -> bool {
        self.api.cors_origins.iter().any(|origin| origin == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
                cors_origins: vec!["*".to_string()],
            },
            database: DatabaseConfig {
                url: "postgres://localhost/todoboard".to_string(),
                max_connections: 10,
            },
            firebase: FirebaseConfig {
                api_key: "test-key".to_string(),
                auth_url: "https://identitytoolkit.googleapis.com".to_string(),
                timeout_seconds: 10,
            },
        }
    }

    #[test]
    fn test_bind_address() {
        let config = test_config();
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
    }

    #[test]
    fn test_cors_allow_any_with_wildcard() {
        let config = test_config();
        assert!(config.cors_allow_any());
    }

    #[test]
    fn test_cors_allow_any_with_explicit_origins() {
        let mut config = test_config();
        config.api.cors_origins = vec![
            "http://localhost:3000".to_string(),
            "https://todoboard.example.com".to_string(),
        ];
        assert!(!config.cors_allow_any());
    }

    #[test]
    fn test_config_serializes() {
        let config = test_config();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("cors_origins"));
        assert!(json.contains("max_connections"));
    }
}

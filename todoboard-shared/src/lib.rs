//! # Todoboard Shared Library
//!
//! This crate contains shared types, data access, and identity-provider
//! integration used across the Todoboard API server and dashboard client.
//!
//! ## Module Organization
//!
//! - `models`: Database models and data structures
//! - `db`: Connection pool and migration runner
//! - `auth`: External identity provider clients (Firebase + mock)

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the Todoboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

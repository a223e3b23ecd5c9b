//! # Todoboard API Server Library
//!
//! HTTP server for the Todoboard backend. The todo collection lives at the
//! root path so the API can be driven by any todo-backend style client, with
//! user and assignment endpoints merged alongside it.
//!
//! ## Module Organization
//!
//! - `app`: Application state and router assembly
//! - `config`: Environment-based configuration
//! - `error`: API error types and HTTP response mapping
//! - `extract`: Custom request extractors
//! - `routes`: HTTP route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod routes;

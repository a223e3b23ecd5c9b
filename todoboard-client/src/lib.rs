//! # Todoboard Dashboard Client
//!
//! Headless client for the Todoboard API. State management follows the
//! dashboard's reducer contract: a fixed state shape, a closed set of
//! actions and a pure reducer, with all I/O kept outside the reducer and
//! fed back in as dispatched actions.
//!
//! ## Module Organization
//!
//! - `api`: HTTP client for the Todoboard API
//! - `state`: Dashboard state, actions, reducer and store

pub mod api;
pub mod state;

pub use api::{ApiClient, ClientError, ClientResult};
pub use state::{Action, DashboardState, FetchedTodos, Store};

/// Application state and router assembly
///
/// The todo collection is served from the root path (`/`, `/:id`) so the
/// server stays compatible with todo-backend style clients; user and
/// assignment endpoints are merged beside it.
use axum::http::{header, HeaderValue, Method};
use axum::routing::{delete, get, post};
use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use todoboard_shared::auth::IdentityProvider;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::Config;
use crate::routes;

/// Shared state available to all route handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Server configuration
    pub config: Arc<Config>,

    /// Identity provider used for registration
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn new(db: PgPool, config: Config, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            db,
            config: Arc::new(config),
            identity,
        }
    }
}

/// Builds the complete application router.
///
/// Static segments are matched before parameter captures, so `/users` and
/// `/todos/:todo_id/assignees` never collide with the `/:id` todo routes.
pub fn build_router(state: AppState) -> Router {
    let todo_routes = Router::new()
        .route(
            "/",
            get(routes::todos::list_todos)
                .post(routes::todos::create_todo)
                .delete(routes::todos::clear_todos),
        )
        .route(
            "/:id",
            get(routes::todos::get_todo)
                .patch(routes::todos::update_todo)
                .delete(routes::todos::delete_todo),
        );

    let user_routes = Router::new()
        .route("/users", get(routes::users::list_users))
        .route("/create-user", post(routes::users::register));

    let assignment_routes = Router::new()
        .route(
            "/todos/:todo_id/assignees",
            get(routes::assignments::list_assignees),
        )
        .route("/assign-todo", post(routes::assignments::assign_todo))
        .route(
            "/delete-assign/:user_id/:todo_id",
            delete(routes::assignments::unassign_todo),
        );

    let cors = build_cors(&state.config);

    Router::new()
        .merge(user_routes)
        .merge(assignment_routes)
        .merge(todo_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

fn build_cors(config: &Config) -> CorsLayer {
    if config.cors_allow_any() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .api
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

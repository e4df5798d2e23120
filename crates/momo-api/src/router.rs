//! Route definitions for the Momo HTTP API.
//!
//! Routes are grouped by resource and mounted under `/api`. The router
//! receives `AppState` and passes it to handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes, request logging and body limits.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let api_routes = Router::new().merge(user_routes()).merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// User CRUD plus the user's posts, comments and likes.
fn user_routes() -> Router<AppState> {
    use handlers::user;

    Router::new()
        .route("/users", get(user::list_users).post(user::create_user))
        .route(
            "/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/users/{id}/posts", get(user::list_user_posts))
        .route("/users/{id}/comments", get(user::list_user_comments))
        .route("/users/{id}/likes", get(user::list_user_likes))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use momo_core::config::AppConfig;
use momo_service::UserController;

/// Application state passed to every handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// User operations. `UserService` in production, a mock in route tests.
    pub users: Arc<dyn UserController>,
}

impl AppState {
    /// Creates state from configuration and a user controller.
    pub fn new(config: AppConfig, users: Arc<dyn UserController>) -> Self {
        Self {
            config: Arc::new(config),
            users,
        }
    }
}

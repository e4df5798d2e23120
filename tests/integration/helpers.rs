//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use axum::Router;
use axum::body::Body;
use chrono::Utc;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tokio::sync::{Mutex, MutexGuard};
use tower::ServiceExt;

use momo_api::{AppState, build_app};
use momo_core::config::AppConfig;
use momo_core::types::UserId;
use momo_database::DatabasePool;
use momo_database::fixtures::truncate_all;
use momo_database::migration::run_migrations;
use momo_entity::User;
use momo_service::{SeedReport, UserController, seed_fixtures};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Build the full app around the given controller.
    pub fn with_controller(controller: impl UserController) -> Self {
        let state = AppState::new(AppConfig::default(), Arc::new(controller));
        Self {
            router: build_app(state),
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str).await
    }

    /// Make an HTTP request with a literal JSON body
    pub async fn raw_request(&self, method: &str, path: &str, body: String) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// A user row as a controller would return it.
pub fn user(id: i64, name: &str, email: &str) -> User {
    let now = Utc::now();
    User {
        id: UserId(id),
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn db_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// A migrated, seeded test database. Holds a lock so DB-backed tests in
/// the same binary run one at a time.
pub struct TestDatabase {
    /// Database pool for direct queries
    pub pool: PgPool,
    /// What the fixtures inserted
    pub seed: SeedReport,
    _guard: MutexGuard<'static, ()>,
}

impl TestDatabase {
    /// Connect using the `test` environment, reset and seed.
    ///
    /// Panics when no database URL is configured. Callers are `#[ignore]`d
    /// and run with `--ignored` against a real PostgreSQL.
    pub async fn setup() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");
        assert!(
            config.database.is_configured(),
            "no test database configured (set MOMO__DATABASE__URL in .env.test)"
        );

        let guard = db_lock().lock().await;

        let pool = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database")
            .into_pool();

        run_migrations(&pool).await.expect("Failed to run migrations");
        truncate_all(&pool).await.expect("Failed to truncate tables");
        let seed = seed_fixtures(&pool).await.expect("Failed to seed fixtures");

        Self {
            pool,
            seed,
            _guard: guard,
        }
    }

    /// Empty every table and close the pool.
    pub async fn teardown(self) {
        truncate_all(&self.pool)
            .await
            .expect("Failed to truncate tables");
        self.pool.close().await;
    }
}

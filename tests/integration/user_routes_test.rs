//! Route-layer tests for `/api/users` with a mocked controller.

mod helpers;

use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use http::StatusCode;
use serde_json::{Value, json};

use momo_core::error::AppError;
use momo_core::types::UserId;
use momo_service::MockUserController;

use helpers::{TestApp, user};

const TOO_LONG_PASSWORD: &str = "thispasswordistoolongvjjsfergkjrngjrngkjdfngkjfngkjrngkjerngkjngjngjngjkngjkngkjngkjfngjkngjngkjngkjfdn";

fn email() -> String {
    SafeEmail().fake()
}

/// Payloads that must be rejected before the controller is reached.
fn invalid_payloads(name: &str) -> Vec<(&'static str, Value)> {
    vec![
        ("empty email", json!({ "name": name, "email": "", "password": "password" })),
        ("invalid email", json!({ "name": name, "email": "invalid_email", "password": "password" })),
        ("empty password", json!({ "name": name, "email": email(), "password": "" })),
        ("short password", json!({ "name": name, "email": email(), "password": "short" })),
        ("long password", json!({ "name": name, "email": email(), "password": TOO_LONG_PASSWORD })),
        ("empty name", json!({ "name": "", "email": email(), "password": "password" })),
        ("blank name", json!({ "name": "   ", "email": email(), "password": "password" })),
        ("missing fields", json!({})),
    ]
}

// ── GET /api/users ──────────────────────────────────────────────

#[tokio::test]
async fn test_list_users() {
    let mut mock = MockUserController::new();
    mock.expect_get_users()
        .times(1)
        .returning(|| Ok(vec![user(1, "Mo Moe", "momo@peachy.com")]));
    let app = TestApp::with_controller(mock);

    let response = app.request("GET", "/api/users", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Mo Moe");
}

#[tokio::test]
async fn test_list_users_never_exposes_password() {
    let mut mock = MockUserController::new();
    mock.expect_get_users()
        .returning(|| Ok(vec![user(1, "Mo Moe", "momo@peachy.com")]));
    let app = TestApp::with_controller(mock);

    let response = app.request("GET", "/api/users", None).await;

    let first = &response.body["data"][0];
    assert!(first.get("password").is_none());
    assert!(first.get("passwordHash").is_none());
    assert!(first.get("createdAt").is_some());
}

// ── GET /api/users/{id} ─────────────────────────────────────────

#[tokio::test]
async fn test_get_user_by_id() {
    let mut mock = MockUserController::new();
    mock.expect_get_user()
        .withf(|id| *id == UserId(1))
        .times(1)
        .returning(|_| Ok(Some(user(1, "Mo Moe", "momo@peachy.com"))));
    let app = TestApp::with_controller(mock);

    let response = app.request("GET", "/api/users/1", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], 1);
    assert_eq!(response.body["data"]["name"], "Mo Moe");
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mut mock = MockUserController::new();
    mock.expect_get_user()
        .withf(|id| *id == UserId(999))
        .times(1)
        .returning(|_| Ok(None));
    let app = TestApp::with_controller(mock);

    let response = app.request("GET", "/api/users/999", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_user_invalid_id() {
    let mut mock = MockUserController::new();
    mock.expect_get_user().never();
    let app = TestApp::with_controller(mock);

    for path in ["/api/users/invalid", "/api/users/0", "/api/users/-1"] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "{path}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
}

// ── POST /api/users ─────────────────────────────────────────────

#[tokio::test]
async fn test_create_user() {
    let mut mock = MockUserController::new();
    mock.expect_create_user()
        .withf(|input| input.name == "Mo Moe" && input.password == "password")
        .times(1)
        .returning(|input| Ok(user(1, &input.name, &input.email)));
    let app = TestApp::with_controller(mock);

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({
                "name": "Mo Moe",
                "email": "momo@peachy.com",
                "password": "password",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], 1);
    assert_eq!(response.body["data"]["name"], "Mo Moe");
}

#[tokio::test]
async fn test_create_user_validation_errors() {
    let mut mock = MockUserController::new();
    mock.expect_create_user().never();
    let app = TestApp::with_controller(mock);

    for (case, payload) in invalid_payloads("Mo Moe") {
        let response = app.request("POST", "/api/users", Some(payload)).await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "{case}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR", "{case}");
        assert!(response.body.get("details").is_some(), "{case}");
    }
}

#[tokio::test]
async fn test_create_user_malformed_json() {
    let mut mock = MockUserController::new();
    mock.expect_create_user().never();
    let app = TestApp::with_controller(mock);

    let response = app
        .raw_request("POST", "/api/users", "{\"name\": ".to_string())
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_user_body_over_limit() {
    let mut mock = MockUserController::new();
    mock.expect_create_user().never();
    let app = TestApp::with_controller(mock);

    let body = json!({
        "name": "x".repeat(70 * 1024),
        "email": "momo@peachy.com",
        "password": "password",
    });
    let response = app
        .raw_request("POST", "/api/users", body.to_string())
        .await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.body["error"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let mut mock = MockUserController::new();
    mock.expect_create_user()
        .times(1)
        .returning(|_| Err(AppError::conflict("Email 'momo@peachy.com' is already in use")));
    let app = TestApp::with_controller(mock);

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({
                "name": "Mo Moe",
                "email": "momo@peachy.com",
                "password": "password",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_store_failure_is_500() {
    let mut mock = MockUserController::new();
    mock.expect_get_users()
        .returning(|| Err(AppError::database("connection refused")));
    let app = TestApp::with_controller(mock);

    let response = app.request("GET", "/api/users", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "INTERNAL_ERROR");
    assert_eq!(response.body["message"], "Internal server error");
}

// ── PUT /api/users/{id} ─────────────────────────────────────────

#[tokio::test]
async fn test_update_user() {
    let mut mock = MockUserController::new();
    mock.expect_update_user()
        .withf(|id, input| *id == UserId(1) && input.password == "updated_password")
        .times(1)
        .returning(|id, input| Ok(Some(user(id.get(), &input.name, &input.email))));
    let app = TestApp::with_controller(mock);

    let response = app
        .request(
            "PUT",
            "/api/users/1",
            Some(json!({
                "name": "Updated Name",
                "email": "momo@peachy.com",
                "password": "updated_password",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], 1);
    assert_eq!(response.body["data"]["name"], "Updated Name");
}

#[tokio::test]
async fn test_update_user_not_found() {
    let mut mock = MockUserController::new();
    mock.expect_update_user()
        .withf(|id, _| *id == UserId(999))
        .times(1)
        .returning(|_, _| Ok(None));
    let app = TestApp::with_controller(mock);

    let response = app
        .request(
            "PUT",
            "/api/users/999",
            Some(json!({
                "name": "Updated Name",
                "email": "updated_email@peachy.com",
                "password": "updated_password",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_user_validation_errors() {
    let mut mock = MockUserController::new();
    mock.expect_update_user().never();
    let app = TestApp::with_controller(mock);

    for (case, payload) in invalid_payloads("Updated Name") {
        let response = app.request("PUT", "/api/users/1", Some(payload)).await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "{case}");
    }
}

#[tokio::test]
async fn test_update_user_invalid_id() {
    let mut mock = MockUserController::new();
    mock.expect_update_user().never();
    let app = TestApp::with_controller(mock);

    let response = app
        .request(
            "PUT",
            "/api/users/invalid",
            Some(json!({
                "name": "Updated Name",
                "email": "momo@peachy.com",
                "password": "updated_password",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ── DELETE /api/users/{id} ──────────────────────────────────────

#[tokio::test]
async fn test_delete_user() {
    let mut mock = MockUserController::new();
    mock.expect_delete_user()
        .withf(|id| *id == UserId(1))
        .times(1)
        .returning(|_| Ok(true));
    let app = TestApp::with_controller(mock);

    let response = app.request("DELETE", "/api/users/1", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["message"], "User deleted");
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let mut mock = MockUserController::new();
    mock.expect_delete_user()
        .withf(|id| *id == UserId(999))
        .times(1)
        .returning(|_| Ok(false));
    let app = TestApp::with_controller(mock);

    let response = app.request("DELETE", "/api/users/999", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_invalid_id() {
    let mut mock = MockUserController::new();
    mock.expect_delete_user().never();
    let app = TestApp::with_controller(mock);

    let response = app.request("DELETE", "/api/users/invalid", None).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ── Related resources ───────────────────────────────────────────

#[tokio::test]
async fn test_user_relations_empty_and_missing() {
    let mut mock = MockUserController::new();
    mock.expect_get_user_comments()
        .withf(|id| *id == UserId(1))
        .returning(|_| Ok(Some(Vec::new())));
    mock.expect_get_user_likes()
        .withf(|id| *id == UserId(999))
        .returning(|_| Ok(None));
    mock.expect_get_user_posts().never();
    let app = TestApp::with_controller(mock);

    let comments = app.request("GET", "/api/users/1/comments", None).await;
    assert_eq!(comments.status, StatusCode::OK);
    assert_eq!(comments.body["data"], json!([]));

    let likes = app.request("GET", "/api/users/999/likes", None).await;
    assert_eq!(likes.status, StatusCode::NOT_FOUND);

    let posts = app.request("GET", "/api/users/abc/posts", None).await;
    assert_eq!(posts.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_health() {
    let mut mock = MockUserController::new();
    mock.expect_health_check().times(1).returning(|| Ok(()));
    let app = TestApp::with_controller(mock);

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "connected");
}

#[tokio::test]
async fn test_health_with_store_down() {
    let mut mock = MockUserController::new();
    mock.expect_health_check()
        .times(1)
        .returning(|| Err(AppError::database("connection refused")));
    let app = TestApp::with_controller(mock);

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["data"]["status"], "degraded");
    assert_eq!(response.body["data"]["database"], "unavailable");
    assert!(response.body["data"]["version"].is_string());
}

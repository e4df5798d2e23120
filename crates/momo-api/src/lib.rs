//! # momo-api
//!
//! HTTP API layer for Momo built on Axum.
//!
//! Provides the `/api` REST endpoints for users and their posts, comments
//! and likes, plus middleware (CORS, compression, request logging),
//! extractors, DTOs with validation, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;

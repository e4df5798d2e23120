//! # momo-service
//!
//! Business logic for Momo. The [`UserController`] trait is the seam the
//! HTTP layer talks to; [`UserService`] implements it on top of the
//! repositories in `momo-database`.
//!
//! Services follow constructor injection: all dependencies are provided at
//! construction time via `Arc` references.

pub mod password;
pub mod seed;
pub mod user;

pub use password::PasswordHasher;
pub use seed::{SeedReport, seed_fixtures};
pub use user::{UserController, UserInput, UserService};

#[cfg(any(test, feature = "mock"))]
pub use user::MockUserController;

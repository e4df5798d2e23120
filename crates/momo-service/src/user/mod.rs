//! User controller seam and its database-backed implementation.

pub mod controller;
pub mod service;

pub use controller::{UserController, UserInput};
pub use service::UserService;

#[cfg(any(test, feature = "mock"))]
pub use controller::MockUserController;

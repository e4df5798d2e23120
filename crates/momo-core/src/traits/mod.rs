//! Core traits defined in `momo-core` and implemented by other crates.

pub mod repository;

pub use repository::{Repository, UserOwned};

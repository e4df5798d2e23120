//! # momo-database
//!
//! PostgreSQL connection management, migrations, and concrete repository
//! implementations for all Momo entities.

pub mod connection;
pub mod fixtures;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;

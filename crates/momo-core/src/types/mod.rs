//! Core type definitions used across the Momo workspace.

pub mod id;

pub use id::*;

//! HTTP middleware and tower layers.

pub mod compression;
pub mod cors;
pub mod logging;

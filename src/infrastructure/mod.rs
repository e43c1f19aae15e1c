//! Infrastructure layer module
//!
//! Adapters that touch the outside world:
//! - Configuration loading (filesystem, process environment)
//! - Logging infrastructure

pub mod config;
pub mod logging;

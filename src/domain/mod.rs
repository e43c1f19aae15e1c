//! Domain layer
//!
//! The configuration schema and its validation. Nothing here performs I/O.

pub mod error;
pub mod models;
pub mod ports;

pub use error::{FieldError, FieldErrorKind, ValidationError};

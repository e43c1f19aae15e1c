//! Domain models

pub mod config;
pub mod secret;

pub use config::{Config, ConfigMapping, CONFIG_FIELDS};
pub use secret::SecretString;

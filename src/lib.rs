//! yamlconf - YAML configuration loading
//!
//! Loads a YAML configuration file, merges an optional `.env` file into the
//! process environment, resolves `${env:NAME}` placeholders and validates the
//! result against a fixed schema.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the [`Config`] schema, its validation and the
//!   [`ConfigSource`] port
//! - **Infrastructure Layer** (`infrastructure`): file loading, interpolation,
//!   the load-once cache and logging setup
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = yamlconf::load_config("config/config.yaml", Some(Path::new("config/.env")))?;
//!     println!("running in {}", config.my_env());
//!
//!     // Loaded once, then served from memory
//!     let cached = yamlconf::get_config()?;
//!     println!("secret is {}", cached.my_secret());
//!     Ok(())
//! }
//! ```

pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{Config, ConfigMapping, SecretString};
pub use domain::ports::{ConfigSource, FsSource};
pub use domain::{FieldError, FieldErrorKind, ValidationError};
pub use infrastructure::config::{
    get_config, load_config, ConfigCache, ConfigLoader, LoadError, DEFAULT_CONFIG_PATH,
    DEFAULT_ENV_FILE_PATH,
};
pub use infrastructure::logging::{LogConfig, LogFormat, LoggerImpl};

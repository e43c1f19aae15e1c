//! Configuration loading infrastructure
//!
//! YAML configuration loaded through figment:
//! - `.env` merging with override semantics
//! - `${env:NAME}` / `${env:NAME,default}` interpolation
//! - Schema validation with aggregated field errors
//! - Process-wide load-once cache

pub mod cache;
pub mod env_file;
pub mod error;
pub mod interpolation;
pub mod loader;

pub use cache::{get_config, ConfigCache};
pub use env_file::load_env_file;
pub use error::LoadError;
pub use loader::{load_config, ConfigLoader, DEFAULT_CONFIG_PATH, DEFAULT_ENV_FILE_PATH};

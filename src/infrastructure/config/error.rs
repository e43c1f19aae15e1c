use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::ValidationError;

/// Errors raised while loading a configuration
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<figment::Error>,
    },

    #[error("Failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("Invalid placeholder at '{location}': {reason}")]
    InvalidPlaceholder { location: String, reason: String },

    #[error("Missing environment variable '{name}' referenced at '{location}'")]
    MissingEnvVar { name: String, location: String },

    #[error("Resolved configuration is not a plain mapping: {0}")]
    Convert(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl LoadError {
    /// Field-level validation detail, when the failure came from the schema
    pub const fn validation_errors(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

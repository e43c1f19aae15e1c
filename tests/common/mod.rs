//! Common test utilities for integration tests
//!
//! Fixture directories holding a config file and an optional `.env` file.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Config and env files written into a temporary directory
pub struct Fixture {
    _dir: TempDir,
    pub config_path: PathBuf,
    pub env_path: PathBuf,
}

impl Fixture {
    /// Write `config.yaml`; the `.env` path is reserved but not created
    pub fn new(config_yaml: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = dir.path().join("config.yaml");
        let env_path = dir.path().join(".env");
        fs::write(&config_path, config_yaml).expect("Failed to write config file");
        Self {
            _dir: dir,
            config_path,
            env_path,
        }
    }

    /// Write `config.yaml` and `.env`
    #[allow(dead_code)]
    pub fn with_env_file(config_yaml: &str, env_contents: &str) -> Self {
        let fixture = Self::new(config_yaml);
        fs::write(&fixture.env_path, env_contents).expect("Failed to write env file");
        fixture
    }
}

/// The three-field document used throughout the tests
#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = r#"my_config_field: "a"
my_env: ${env:MY_ENV}
my_secret: ${env:MY_SECRET}
"#;

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

use std::path::Path;

use figment::providers::{Format, Yaml};
use figment::value::Dict;
use figment::Figment;
use serde::Deserialize;

use super::env_file::load_env_file;
use super::error::LoadError;
use super::interpolation::{process_env, resolve_tree};
use crate::domain::models::config::{Config, ConfigMapping};
use crate::domain::ports::{ConfigSource, FsSource};

/// Default location of the primary configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

/// Default location of the supplementary `.env` file, relative to the working directory
pub const DEFAULT_ENV_FILE_PATH: &str = "config/.env";

/// Loads and validates configuration files
///
/// Pipeline:
/// 1. `.env` file merged into the process environment (override)
/// 2. YAML file parsed into a raw tree
/// 3. `${env:NAME}` placeholders resolved depth-first
/// 4. Tree converted into a plain mapping
/// 5. Mapping validated into a [`Config`]
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader<S = FsSource> {
    source: S,
}

impl ConfigLoader<FsSource> {
    /// Loader reading from the local filesystem
    pub const fn new() -> Self {
        Self { source: FsSource }
    }
}

impl<S: ConfigSource> ConfigLoader<S> {
    /// Loader reading the primary configuration file through `source`
    pub const fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Source the primary configuration file is read through
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Load configuration from `config_path`, merging `env_file` first.
    ///
    /// When `env_file` is given and exists, every `KEY=VALUE` it holds is
    /// written to the process environment, replacing existing values. This
    /// side effect persists after the call, even if loading later fails.
    pub fn load(
        &self,
        config_path: impl AsRef<Path>,
        env_file: Option<&Path>,
    ) -> Result<Config, LoadError> {
        let config_path = config_path.as_ref();

        if let Some(env_file) = env_file {
            load_env_file(env_file)?;
        }

        let contents = self
            .source
            .read_to_string(config_path)
            .map_err(|source| LoadError::FileRead {
                path: config_path.to_path_buf(),
                source,
            })?;

        let mut tree = parse_yaml(config_path, &contents)?;
        resolve_tree(&mut tree, &process_env)?;
        let mapping = into_mapping(&tree)?;
        let config = Config::from_mapping(&mapping)?;

        tracing::info!(
            path = %config_path.display(),
            env = %config.my_env(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Load from [`DEFAULT_CONFIG_PATH`] with [`DEFAULT_ENV_FILE_PATH`]
    pub fn load_defaults(&self) -> Result<Config, LoadError> {
        self.load(DEFAULT_CONFIG_PATH, Some(Path::new(DEFAULT_ENV_FILE_PATH)))
    }
}

/// Load configuration from the filesystem.
///
/// See [`ConfigLoader::load`] for the environment side effect.
pub fn load_config(
    config_path: impl AsRef<Path>,
    env_file: Option<&Path>,
) -> Result<Config, LoadError> {
    ConfigLoader::new().load(config_path, env_file)
}

fn parse_yaml(path: &Path, contents: &str) -> Result<Dict, LoadError> {
    if contents.trim().is_empty() {
        return Ok(Dict::new());
    }

    Figment::from(Yaml::string(contents))
        .extract::<Dict>()
        .map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
}

fn into_mapping(tree: &Dict) -> Result<ConfigMapping, LoadError> {
    let mapping = serde_json::to_value(tree).and_then(ConfigMapping::deserialize)?;
    Ok(mapping)
}

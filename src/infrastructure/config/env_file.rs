use std::env;
use std::path::Path;

use super::error::LoadError;

/// Load a `.env` file into the process environment, overriding existing values.
///
/// A missing file is not an error and loads nothing. The whole file is parsed
/// before any variable is set, so a malformed line leaves the environment
/// untouched. Returns the number of variables set.
pub fn load_env_file(path: &Path) -> Result<usize, LoadError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(err) if err.not_found() => {
            tracing::debug!(path = %path.display(), "env file not found, skipping");
            return Ok(0);
        }
        Err(source) => {
            return Err(LoadError::EnvFile {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let entries = iter
        .collect::<Result<Vec<(String, String)>, _>>()
        .map_err(|source| LoadError::EnvFile {
            path: path.to_path_buf(),
            source,
        })?;

    for (key, value) in &entries {
        env::set_var(key, value);
    }

    tracing::debug!(
        path = %path.display(),
        count = entries.len(),
        "loaded env file with override"
    );
    Ok(entries.len())
}

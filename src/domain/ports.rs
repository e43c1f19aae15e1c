//! Ports through which the loader reaches the outside world.

use std::io;
use std::path::Path;

/// Source of raw configuration file contents
///
/// The loader reads the primary configuration file only through this trait,
/// so callers can substitute an instrumented or in-memory source.
pub trait ConfigSource: Send + Sync {
    /// Read the whole file at `path` as UTF-8 text
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads configuration files from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl ConfigSource for FsSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

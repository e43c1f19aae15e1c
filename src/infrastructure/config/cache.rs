use std::sync::{Mutex, OnceLock, PoisonError};

use super::error::LoadError;
use super::loader::ConfigLoader;
use crate::domain::models::config::Config;

static GLOBAL_CONFIG: ConfigCache = ConfigCache::new();

/// Load-once cell for a [`Config`]
///
/// The first successful load is kept for the lifetime of the cache; later
/// calls return the same instance without running the loader. A failed load
/// stores nothing, so the next call tries again. Population is serialized by
/// a mutex, so concurrent first callers run at most one load at a time.
#[derive(Debug)]
pub struct ConfigCache {
    cell: OnceLock<Config>,
    init_lock: Mutex<()>,
}

impl ConfigCache {
    /// Empty cache
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Cached configuration, if a load has succeeded
    pub fn get(&self) -> Option<&Config> {
        self.cell.get()
    }

    /// Whether a configuration has been cached
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Return the cached configuration, running `load` if nothing is cached yet
    pub fn get_or_load<F>(&self, load: F) -> Result<&Config, LoadError>
    where
        F: FnOnce() -> Result<Config, LoadError>,
    {
        if let Some(config) = self.cell.get() {
            tracing::debug!("configuration served from cache");
            return Ok(config);
        }

        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Another caller may have finished loading while we waited.
        if let Some(config) = self.cell.get() {
            return Ok(config);
        }

        let config = load()?;
        Ok(self.cell.get_or_init(|| config))
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide configuration, loaded on first use from the default paths.
///
/// The first successful call wins: the cache is not keyed by path, and
/// explicit [`load_config`](super::load_config) calls never touch it. There is
/// no invalidation.
pub fn get_config() -> Result<&'static Config, LoadError> {
    GLOBAL_CONFIG.get_or_load(|| ConfigLoader::new().load_defaults())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{ConfigSource, FsSource};
    use std::io::{self, Write};
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    #[derive(Default)]
    struct CountingSource {
        reads: AtomicUsize,
    }

    impl ConfigSource for CountingSource {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            FsSource.read_to_string(path)
        }
    }

    fn yaml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_second_call_returns_same_instance_and_reads_once() {
        let file = yaml_file("my_config_field: a\nmy_env: prod\nmy_secret: xyz\n");
        let loader = ConfigLoader::with_source(CountingSource::default());
        let cache = ConfigCache::new();

        let first = cache.get_or_load(|| loader.load(file.path(), None)).unwrap();
        let second = cache.get_or_load(|| loader.load(file.path(), None)).unwrap();

        assert!(std::ptr::eq(first, second));
        assert_eq!(loader.source().reads.load(Ordering::SeqCst), 1);
        assert!(cache.is_loaded());
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let cache = ConfigCache::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let err = cache
            .get_or_load(|| crate::load_config(&path, None))
            .unwrap_err();
        assert!(matches!(err, LoadError::FileRead { .. }));
        assert!(cache.get().is_none());

        std::fs::write(&path, "my_config_field: a\nmy_env: dev\nmy_secret: s\n").unwrap();
        let config = cache
            .get_or_load(|| crate::load_config(&path, None))
            .unwrap();
        assert_eq!(config.my_env(), "dev");
    }

    #[test]
    fn test_cached_value_ignores_later_loader() {
        let cache = ConfigCache::new();
        cache
            .get_or_load(|| Ok(Config::new("first", "dev", "s".to_string())))
            .unwrap();

        let config = cache
            .get_or_load(|| panic!("loader must not run once cached"))
            .unwrap();
        assert_eq!(config.my_config_field(), "first");
    }

    #[test]
    fn test_concurrent_first_calls_load_once() {
        let cache = Arc::new(ConfigCache::new());
        let loads = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let loads = Arc::clone(&loads);
                std::thread::spawn(move || {
                    let config = cache
                        .get_or_load(|| {
                            loads.fetch_add(1, Ordering::SeqCst);
                            Ok(Config::new("a", "prod", "xyz".to_string()))
                        })
                        .unwrap();
                    std::ptr::from_ref(config) as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }
}

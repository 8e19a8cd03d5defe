//! Process-wide reuse of loaded boundaries without ambient global state.
//!
//! A [`BoundaryCache`] is created by the host and handed to whoever needs boundaries.
//! Entries are keyed by the canonical file path plus the [`PropertyNames`] used to read it,
//! so two callers asking for the same file with the same keys share one parsed
//! [`BoundarySource`]. Loads that fail are not remembered.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::{BoundarySource, PropertyNames};
use crate::error::LoadError;

type CacheKey = (PathBuf, PropertyNames);

#[derive(Default)]
pub struct BoundaryCache {
    entries: Mutex<HashMap<CacheKey, Arc<BoundarySource>>>,
}

impl BoundaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached source for `path`, loading it on first use.
    pub fn get_or_load(
        &self,
        path: impl AsRef<Path>,
        properties: &PropertyNames,
    ) -> Result<Arc<BoundarySource>, LoadError> {
        let path = path.as_ref();
        let canonical = path.canonicalize().map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let key: CacheKey = (canonical, properties.clone());

        // The lock is held across the load so concurrent callers never parse the same file twice.
        let mut entries = self.entries();
        if let Some(source) = entries.get(&key) {
            debug!("Boundary cache hit for {}", key.0.display());
            return Ok(Arc::clone(source));
        }

        let source = Arc::new(BoundarySource::load(&key.0, properties)?);
        entries.insert(key, Arc::clone(&source));
        Ok(source)
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries().clear();
    }

    // Entries are only ever inserted whole, so a panic elsewhere cannot leave one half-built.
    fn entries(&self) -> MutexGuard<'_, HashMap<CacheKey, Arc<BoundarySource>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::tests::TWO_SQUARES;
    use std::fs;

    fn boundary_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("states.geojson");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn same_key_returns_same_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = boundary_file(&dir, TWO_SQUARES);
        let cache = BoundaryCache::new();
        let names = PropertyNames::new("NAME_1");

        let first = cache.get_or_load(&path, &names).unwrap();
        let second = cache.get_or_load(&path, &names).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn relative_and_absolute_paths_share_an_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = boundary_file(&dir, TWO_SQUARES);
        let dotted = dir.path().join(".").join("states.geojson");
        let cache = BoundaryCache::new();
        let names = PropertyNames::new("NAME_1");

        let first = cache.get_or_load(&path, &names).unwrap();
        let second = cache.get_or_load(&dotted, &names).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn different_properties_load_separately() {
        let dir = tempfile::tempdir().unwrap();
        let path = boundary_file(&dir, TWO_SQUARES);
        let cache = BoundaryCache::new();

        let plain = cache.get_or_load(&path, &PropertyNames::new("NAME_1")).unwrap();
        let valued = cache
            .get_or_load(&path, &PropertyNames::new("NAME_1").with_value("pop"))
            .unwrap();

        assert!(!Arc::ptr_eq(&plain, &valued));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn poisoned_lock_still_reports_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = boundary_file(&dir, TWO_SQUARES);
        let cache = Arc::new(BoundaryCache::new());
        cache.get_or_load(&path, &PropertyNames::new("NAME_1")).unwrap();

        let poisoner = Arc::clone(&cache);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.entries.lock().unwrap();
            panic!("poison the cache lock");
        })
        .join();

        assert!(cache.entries.is_poisoned());
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn failures_are_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = boundary_file(&dir, TWO_SQUARES);
        let cache = BoundaryCache::new();

        assert!(cache.get_or_load(&path, &PropertyNames::new("st_nm")).is_err());
        assert!(cache.is_empty());

        cache.get_or_load(&path, &PropertyNames::new("NAME_1")).unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }
}

//! Lazily-initialized, process-wide locality index cache.

use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use crate::locality::{IbgeFetcher, LocalityFetcher, LocalityIndex};

/// Caches the locality index for the lifetime of the process.
///
/// The first call to [`LocalityService::index`] performs the blocking fetch;
/// every later call returns the shared, read-only index. A failed fetch is
/// logged and cached as an empty index so a flaky endpoint cannot stall
/// repeated cleaning runs; [`LocalityService::invalidate`] drops the cache
/// so the next call fetches again.
#[derive(Debug)]
pub struct LocalityService<F = IbgeFetcher> {
    fetcher: F,
    cache: RwLock<Option<Arc<LocalityIndex>>>,
}

impl LocalityService<IbgeFetcher> {
    pub fn new() -> Self {
        LocalityService::with_fetcher(IbgeFetcher::new())
    }
}

impl Default for LocalityService<IbgeFetcher> {
    fn default() -> Self {
        LocalityService::new()
    }
}

impl<F: LocalityFetcher> LocalityService<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        LocalityService {
            fetcher,
            cache: RwLock::new(None),
        }
    }

    /// Returns the cached index, building it on first use.
    pub fn index(&self) -> Arc<LocalityIndex> {
        if let Ok(guard) = self.cache.read()
            && let Some(index) = guard.as_ref()
        {
            return Arc::clone(index);
        }
        let built = match self.fetcher.fetch() {
            Ok(entries) => {
                let index = LocalityIndex::from_municipalities(&entries);
                info!(
                    cities = index.city_count(),
                    states = index.state_count(),
                    "locality reference loaded"
                );
                Arc::new(index)
            }
            Err(error) => {
                warn!(%error, "locality reference unavailable; continuing with empty index");
                Arc::new(LocalityIndex::default())
            }
        };
        if let Ok(mut guard) = self.cache.write() {
            *guard = Some(Arc::clone(&built));
        }
        built
    }

    /// Drops the cached index; the next [`Self::index`] call refetches.
    pub fn invalidate(&self) {
        if let Ok(mut guard) = self.cache.write() {
            *guard = None;
        }
    }
}

use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use lru::LruCache;

use crate::extractor;
use crate::models::{ExtractOptions, ModuleSurface};

/// Default number of extraction results kept by [`ExtractCache`].
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Bounded least-recently-used cache over [`extract_with`], keyed by the
/// trimmed source text. Absent outcomes are cached like any other result,
/// so repeated lookups of a module without a usable export stay cheap.
///
/// The cache is a wrapper around the pure extraction function, not part of
/// it; callers that do not care about repeated inputs can ignore it
/// entirely.
///
/// [`extract_with`]: crate::extractor::extract_with
pub struct ExtractCache {
    entries: Mutex<LruCache<String, Option<ModuleSurface>>>,
}

impl ExtractCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Serve the extraction result for `source` from cache, computing and
    /// storing it on a miss. Identical concurrent calls may both compute,
    /// but they insert equal values; entries are never observed
    /// half-written.
    pub fn get_or_extract(
        &self,
        source: &str,
        options: &ExtractOptions,
    ) -> Option<ModuleSurface> {
        let key = source.trim();

        {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(result) = entries.get(key) {
                tracing::trace!("Extraction for {} served from cache", options.filename);
                return result.clone();
            }
        }

        let result = extractor::extract_with(source, options);

        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.put(key.to_string(), result.clone());
        result
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for ExtractCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

//! Per-pass registry of loaded documents
//!
//! Each external document is read and parsed at most once per resolution
//! pass. The registry lives inside one `ResolvedDocument` and is dropped
//! with it.
//!
//! Copyright (c) 2026 Oadoc Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::LoaderResult;
use crate::loader::{DocumentLoader, Location};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Loaded documents keyed by location
#[derive(Debug, Default)]
pub struct DocumentCache {
    documents: HashMap<Location, Value>,
    hits: usize,
    loads: usize,
}

impl DocumentCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already parsed document
    pub fn insert(&mut self, location: Location, document: Value) {
        self.documents.insert(location, document);
    }

    /// Whether a document is registered for `location`
    pub fn contains(&self, location: &Location) -> bool {
        self.documents.contains_key(location)
    }

    /// Get a document, loading it through `loader` on first access
    pub fn get_or_load(
        &mut self,
        location: &Location,
        loader: &dyn DocumentLoader,
    ) -> LoaderResult<&Value> {
        if self.documents.contains_key(location) {
            self.hits += 1;
            trace!(location = %location, "Document cache hit");
        } else {
            let document = loader.load(location)?;
            self.loads += 1;
            debug!(location = %location, "Document loaded into cache");
            self.documents.insert(location.clone(), document);
        }

        // Present in both branches above
        Ok(&self.documents[location])
    }

    /// Snapshot of cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.documents.len(),
            loads: self.loads,
            hits: self.hits,
        }
    }
}

/// Document cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub total_entries: usize,
    /// Number of documents read and parsed through the loader
    pub loads: usize,
    /// Number of accesses served from the registry
    pub hits: usize,
}

impl CacheStats {
    /// Fraction of accesses served from the registry, as a percentage
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.loads;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoaderError;
    use serde_json::json;
    use std::cell::Cell;
    use std::path::PathBuf;

    struct CountingLoader {
        calls: Cell<usize>,
    }

    impl DocumentLoader for CountingLoader {
        fn load(&self, location: &Location) -> LoaderResult<Value> {
            self.calls.set(self.calls.get() + 1);
            match location {
                Location::File(_) => Ok(json!({"components": {}})),
                _ => Err(LoaderError::InlineSource),
            }
        }
    }

    #[test]
    fn test_document_loaded_once() {
        let loader = CountingLoader { calls: Cell::new(0) };
        let mut cache = DocumentCache::new();
        let location = Location::File(PathBuf::from("/specs/common.yaml"));

        for _ in 0..3 {
            let document = cache.get_or_load(&location, &loader).unwrap();
            assert!(document.get("components").is_some());
        }

        assert_eq!(loader.calls.get(), 1);
        let stats = cache.stats();
        assert_eq!(stats.loads, 1);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.total_entries, 1);
        assert!((stats.hit_rate() - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let loader = CountingLoader { calls: Cell::new(0) };
        let mut cache = DocumentCache::new();

        assert!(cache.get_or_load(&Location::Inline, &loader).is_err());
        assert!(cache.get_or_load(&Location::Inline, &loader).is_err());
        assert_eq!(loader.calls.get(), 2);
        assert!(!cache.contains(&Location::Inline));
    }
}

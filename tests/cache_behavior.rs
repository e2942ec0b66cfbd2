//! Tests for the LRU result cache wrapped around the pure extraction
//! function: hit/miss bookkeeping, eviction, and concurrent access.

use std::sync::Arc;
use std::thread;

use export_surface::{extract, ExportKind, ExtractCache, ExtractOptions};

const CONTROLLER: &str = "export default class UserController { index() {} store() {} }";

#[test]
fn test_cached_result_matches_pure_extraction() {
    let cache = ExtractCache::new(8);
    let options = ExtractOptions::default();

    let cached = cache.get_or_extract(CONTROLLER, &options);
    assert_eq!(cached, extract(CONTROLLER));

    // Second call is a hit and must be structurally equal.
    let hit = cache.get_or_extract(CONTROLLER, &options);
    assert_eq!(hit, cached);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_bounds_entry_count() {
    let cache = ExtractCache::new(3);
    let options = ExtractOptions::default();

    for name in ["a", "b", "c", "d", "e"] {
        let source = format!("export default class C {{ {name}() {{}} }}");
        cache.get_or_extract(&source, &options);
    }

    assert_eq!(cache.len(), 3);
}

#[test]
fn test_cache_serves_absent_outcomes() {
    let cache = ExtractCache::new(4);
    let options = ExtractOptions::default();

    assert!(cache.get_or_extract("const a = 1", &options).is_none());
    assert!(cache.get_or_extract("const a = 1", &options).is_none());
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_concurrent_identical_lookups() {
    let cache = Arc::new(ExtractCache::new(16));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                cache.get_or_extract(CONTROLLER, &ExtractOptions::default())
            })
        })
        .collect();

    for handle in handles {
        let surface = handle.join().unwrap().unwrap();
        assert_eq!(surface.kind, ExportKind::Class);
        assert_eq!(surface.method_names(), vec!["index", "store"]);
    }

    assert_eq!(cache.len(), 1);
}

#[test]
fn test_concurrent_distinct_lookups() {
    let cache = Arc::new(ExtractCache::new(16));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let source = format!("export default class C {{ method{i}() {{}} }}");
                cache
                    .get_or_extract(&source, &ExtractOptions::default())
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let surface = handle.join().unwrap();
        assert_eq!(surface.method_names(), vec![format!("method{i}")]);
    }

    assert_eq!(cache.len(), 4);
}

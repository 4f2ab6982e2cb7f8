// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Memoization of slow lookups, like geocoding or fetching city descriptions.
//!
//! Caches are plain values owned by whoever orchestrates the lookups;
//! there is no global state. Entries live as long as the cache itself.

use std::collections::hash_map::{Entry, HashMap};

use crate::airport::{normalize_code, Airport, CoordinateSource};

/// Memoization map keyed by case-insensitive lookup keys (e.g. airport codes).
///
/// Store `Option<T>` values to also remember negative results,
/// so that unknown keys are not looked up over and over again.
#[derive(Debug, Clone)]
pub struct LookupCache<V> {
    entries: HashMap<String, V>,
    hits: u64,
    misses: u64,
}

impl<V> Default for LookupCache<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::default(),
            hits: 0,
            misses: 0,
        }
    }
}

impl<V> LookupCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of [get_or_try_insert_with](LookupCache::get_or_try_insert_with)
    /// calls answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of [get_or_try_insert_with](LookupCache::get_or_try_insert_with)
    /// calls which had to compute the value.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Retrieves a cached value, without affecting hit and miss counters.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(&normalize_code(key))
    }

    /// Creates or replaces a cached value.
    pub fn insert(&mut self, key: &str, value: V) {
        self.entries.insert(normalize_code(key), value);
    }

    /// Removes all entries and resets the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Returns the value cached under `key`, computing it with `f` if it's missing.
    ///
    /// `f` receives the normalized key. Errors returned by `f` are passed through
    /// and not cached - the next call with the same key will call `f` again.
    pub fn get_or_try_insert_with<E, F>(&mut self, key: &str, f: F) -> Result<&V, E>
    where
        F: FnOnce(&str) -> Result<V, E>,
    {
        match self.entries.entry(normalize_code(key)) {
            Entry::Occupied(e) => {
                self.hits += 1;
                Ok(e.into_mut())
            }
            Entry::Vacant(e) => {
                self.misses += 1;
                let value = f(e.key())?;
                Ok(e.insert(value))
            }
        }
    }
}

/// [CoordinateSource] which remembers answers of another source,
/// including "not found" answers. Errors are not remembered.
///
/// To avoid throttling cache hits, wrap a
/// [ThrottledSource](crate::throttle::ThrottledSource) in a CachedSource, not the other way around.
#[derive(Debug, Clone)]
pub struct CachedSource<S> {
    source: S,
    cache: LookupCache<Option<Airport>>,
}

impl<S> CachedSource<S> {
    pub fn new(source: S) -> Self {
        Self::with_cache(source, LookupCache::default())
    }

    /// Creates a CachedSource with pre-populated cache.
    pub fn with_cache(source: S, cache: LookupCache<Option<Airport>>) -> Self {
        Self { source, cache }
    }

    pub fn cache(&self) -> &LookupCache<Option<Airport>> {
        &self.cache
    }

    pub fn into_parts(self) -> (S, LookupCache<Option<Airport>>) {
        (self.source, self.cache)
    }
}

impl<S: CoordinateSource> CoordinateSource for CachedSource<S> {
    type Error = S::Error;

    fn lookup(&mut self, code: &str) -> Result<Option<Airport>, Self::Error> {
        let source = &mut self.source;
        self.cache
            .get_or_try_insert_with(code, |key| source.lookup(key))
            .cloned()
    }
}

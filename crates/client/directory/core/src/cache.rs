//! Query cache keyed by search term.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::types::DirectoryPage;

/// Number of search terms kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 32;

#[derive(Debug, Clone)]
struct CacheEntry {
    page: DirectoryPage,
    fetched_at: DateTime<Utc>,
    stale: bool,
}

/// Cached directory pages, one entry per distinct search term.
///
/// Mutations call [`QueryCache::invalidate_all`] rather than patching
/// entries: every term refetches on next use. Each invalidation starts a new
/// generation, and a page fetched under an older generation is stored stale.
/// Past `capacity` terms, stale entries are evicted first, then the oldest.
#[derive(Debug)]
pub struct QueryCache {
    entries: HashMap<String, CacheEntry>,
    generation: u64,
    capacity: usize,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            generation: 0,
            capacity: capacity.max(1),
        }
    }

    /// Invalidation counter; capture it before fetching a page.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stores a page fetched under the current generation.
    pub fn insert(&mut self, term: &str, page: DirectoryPage, fetched_at: DateTime<Utc>) {
        self.insert_as_of(term, page, fetched_at, self.generation);
    }

    /// Stores a page fetched while the cache was at `generation`.
    ///
    /// Returns `false` when an invalidation happened since, in which case the
    /// page is kept stale.
    pub fn insert_as_of(
        &mut self,
        term: &str,
        page: DirectoryPage,
        fetched_at: DateTime<Utc>,
        generation: u64,
    ) -> bool {
        let current = generation == self.generation;
        self.entries.insert(
            term.to_string(),
            CacheEntry {
                page,
                fetched_at,
                stale: !current,
            },
        );
        self.evict_overflow();
        current
    }

    /// Cached page for `term` unless it was invalidated.
    pub fn fresh(&self, term: &str) -> Option<&DirectoryPage> {
        self.entries
            .get(term)
            .filter(|entry| !entry.stale)
            .map(|entry| &entry.page)
    }

    /// Cached page for `term` regardless of staleness.
    pub fn get(&self, term: &str) -> Option<&DirectoryPage> {
        self.entries.get(term).map(|entry| &entry.page)
    }

    pub fn is_stale(&self, term: &str) -> Option<bool> {
        self.entries.get(term).map(|entry| entry.stale)
    }

    /// Marks every entry stale and starts a new generation, returning how
    /// many entries were affected.
    pub fn invalidate_all(&mut self) -> usize {
        self.generation += 1;
        for entry in self.entries.values_mut() {
            entry.stale = true;
        }
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_overflow(&mut self) {
        while self.entries.len() > self.capacity {
            let victim = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| (!entry.stale, entry.fetched_at))
                .map(|(term, _)| term.clone());
            match victim {
                Some(term) => {
                    self.entries.remove(&term);
                }
                None => break,
            }
        }
    }
}

use std::{
    num::NonZeroUsize,
    sync::{
        Mutex,
        PoisonError,
    },
};

use lru::LruCache;
use pokedex_data::{
    AnyResource,
    Category,
};

use crate::{
    Lookup,
    Query,
};

type CacheKey = (Category, Query);

/// A bounded, least-recently-used cache of lookup results.
///
/// A cache belongs to exactly one published set of reference data. Reloading publishes a new,
/// empty cache along with the new data, so results from old data are never served.
pub struct LookupCache {
    entries: Mutex<LruCache<CacheKey, Lookup<AnyResource>>>,
}

impl LookupCache {
    /// Creates a new cache.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Gets the cached result of a lookup.
    pub fn get(&self, category: Category, query: &Query) -> Option<Lookup<AnyResource>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(category, query.clone()))
            .cloned()
    }

    /// Caches the result of a lookup.
    pub fn save(&self, category: Category, query: Query, result: Lookup<AnyResource>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put((category, query), result);
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod cache_test {
    use std::num::NonZeroUsize;

    use pokedex_data::{
        AnyResource,
        Category,
    };
    use pretty_assertions::assert_eq;

    use crate::{
        Lookup,
        LookupCache,
        Query,
    };

    fn capacity(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn caches_results_per_category() {
        let cache = LookupCache::new(capacity(4));
        assert!(cache.is_empty());
        cache.save(Category::Moves, Query::Id(1), Lookup::NotFound);
        assert_eq!(
            cache.get(Category::Moves, &Query::Id(1)),
            Some(Lookup::<AnyResource>::NotFound)
        );
        assert_eq!(cache.get(Category::Pokemon, &Query::Id(1)), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn evicts_least_recently_used() {
        let cache = LookupCache::new(capacity(2));
        cache.save(Category::Moves, Query::Id(1), Lookup::NotFound);
        cache.save(Category::Moves, Query::Id(2), Lookup::NotFound);
        // Touch 1 so that 2 is evicted next.
        assert!(cache.get(Category::Moves, &Query::Id(1)).is_some());
        cache.save(Category::Moves, Query::Id(3), Lookup::NotFound);
        assert!(cache.get(Category::Moves, &Query::Id(1)).is_some());
        assert!(cache.get(Category::Moves, &Query::Id(2)).is_none());
        assert!(cache.get(Category::Moves, &Query::Id(3)).is_some());
    }
}

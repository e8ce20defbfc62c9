//! Session-scoped caching of service responses.
//!
//! Nothing is written to disk: a cache lives exactly as long as the
//! interactive session that owns it.

use lru::LruCache;
use std::{hash::Hash, num::NonZeroUsize};
use tracing::debug;

use crate::{
    cli::types::PlayerId,
    nba::{
        directory::PlayerDirectory,
        types::{PlayerRecord, StatBundle},
        DirectorySource, StatsProvider,
    },
    Result,
};

/// Hit/miss counters for a [`SessionCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Bounded LRU cache with hit/miss accounting.
pub struct SessionCache<K: Hash + Eq, V: Clone> {
    entries: LruCache<K, V>,
    stats: CacheStats,
}

impl<K: Hash + Eq, V: Clone> SessionCache<K, V> {
    /// Create a cache holding at most `capacity` entries (a capacity of 0 holds one).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
            stats: CacheStats::default(),
        }
    }

    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.entries.get(key) {
            Some(value) => {
                self.stats.hits += 1;
                Some(value.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    pub fn put(&mut self, key: K, value: V) {
        self.entries.put(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

/// Wraps a provider so the directory is fetched once per session and career
/// stats are fetched at most once per player while they stay cached.
pub struct CachedProvider<P> {
    inner: P,
    directory: Option<PlayerDirectory>,
    bundles: SessionCache<PlayerId, StatBundle>,
}

impl<P> CachedProvider<P>
where
    P: StatsProvider + DirectorySource,
{
    pub fn new(inner: P, capacity: usize) -> Self {
        Self {
            inner,
            directory: None,
            bundles: SessionCache::new(capacity),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn bundle_cache(&self) -> &SessionCache<PlayerId, StatBundle> {
        &self.bundles
    }

    async fn directory(&mut self) -> Result<&PlayerDirectory> {
        if self.directory.is_none() {
            let directory = self.inner.load_directory().await?;
            debug!(players = directory.len(), "player directory loaded");
            self.directory = Some(directory);
        }
        Ok(self.directory.get_or_insert_with(PlayerDirectory::default))
    }
}

impl<P> StatsProvider for CachedProvider<P>
where
    P: StatsProvider + DirectorySource,
{
    async fn find_players_by_full_name(&mut self, name: &str) -> Result<Vec<PlayerRecord>> {
        Ok(self.directory().await?.find_by_full_name(name))
    }

    async fn career_stats(&mut self, player_id: PlayerId) -> Result<StatBundle> {
        if let Some(bundle) = self.bundles.get(&player_id) {
            debug!(%player_id, "career stats served from session cache");
            return Ok(bundle);
        }

        let bundle = self.inner.career_stats(player_id).await?;
        self.bundles.put(player_id, bundle.clone());
        Ok(bundle)
    }
}

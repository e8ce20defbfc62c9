//! Core utilities shared by the session: the in-memory response cache.

pub mod cache;

pub use cache::{CacheStats, CachedProvider, SessionCache};

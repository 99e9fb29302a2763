//! Set store abstraction.
//!
//! PhoneDB keeps all of its state in an external set-oriented key-value
//! store. This module defines the minimal surface the engine needs and
//! provides two backends: Redis for production and an in-memory store for
//! tests and embedded use.

pub mod memory;
pub mod redis;

use crate::error::StoreResult;
use async_trait::async_trait;
use std::collections::HashSet;

pub use memory::MemorySetStore;
pub use redis::RedisSetStore;

/// A named-set store with add, intersection and full-membership reads.
///
/// Implementations must serialize concurrent mutations to the same set at
/// their own layer; the engine assumes atomic add/intersect semantics and
/// performs no locking of its own. Transient failures are surfaced as
/// `StoreError` and never retried here.
#[async_trait]
pub trait SetStore: Send + Sync {
    /// Add members to the set at `key`, creating it if absent.
    ///
    /// Returns the number of members actually inserted, which excludes
    /// members that were already present.
    async fn sadd(&self, key: &str, members: &[String]) -> StoreResult<u64>;

    /// Intersect the sets at `keys`. A missing key reads as an empty set.
    async fn sinter(&self, keys: &[&str]) -> StoreResult<HashSet<String>>;

    /// Read all members of the set at `key`. A missing key reads as empty.
    async fn smembers(&self, key: &str) -> StoreResult<HashSet<String>>;

    /// Count the members of the set at `key`.
    async fn scard(&self, key: &str) -> StoreResult<u64>;
}

//! In-memory set store.

use super::SetStore;
use crate::error::StoreResult;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// In-process set store keyed by name.
///
/// Mirrors the Redis set semantics closely enough for the engine: adds
/// report the number of newly-inserted members, and reads of missing keys
/// behave as empty sets. Unlike Redis it can hold an empty set, which a
/// zero-member `sadd` creates.
///
/// Intended for tests and embedded single-process use.
#[derive(Clone, Default)]
pub struct MemorySetStore {
    sets: Arc<RwLock<HashMap<String, HashSet<String>>>>,
}

impl MemorySetStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all sets. Counterpart of a Redis FLUSHDB, for test setup.
    pub async fn flush(&self) {
        let mut sets = self.sets.write().await;
        sets.clear();
    }

    /// Number of named sets currently held (including empty ones).
    pub async fn key_count(&self) -> usize {
        let sets = self.sets.read().await;
        sets.len()
    }
}

#[async_trait]
impl SetStore for MemorySetStore {
    async fn sadd(&self, key: &str, members: &[String]) -> StoreResult<u64> {
        let mut sets = self.sets.write().await;
        let set = sets.entry(key.to_string()).or_default();
        let mut added = 0u64;
        for member in members {
            if set.insert(member.clone()) {
                added += 1;
            }
        }
        debug!("Added {} members to {}", added, key);
        Ok(added)
    }

    async fn sinter(&self, keys: &[&str]) -> StoreResult<HashSet<String>> {
        let sets = self.sets.read().await;

        let Some((first, rest)) = keys.split_first() else {
            return Ok(HashSet::new());
        };

        let Some(first_set) = sets.get(*first) else {
            return Ok(HashSet::new());
        };

        let mut result = first_set.clone();
        for key in rest {
            match sets.get(*key) {
                Some(set) => result.retain(|member| set.contains(member)),
                None => return Ok(HashSet::new()),
            }
        }
        Ok(result)
    }

    async fn smembers(&self, key: &str) -> StoreResult<HashSet<String>> {
        let sets = self.sets.read().await;
        Ok(sets.get(key).cloned().unwrap_or_default())
    }

    async fn scard(&self, key: &str) -> StoreResult<u64> {
        let sets = self.sets.read().await;
        Ok(sets.get(key).map(|s| s.len() as u64).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_sadd_counts_new_members_only() {
        let store = MemorySetStore::new();
        let added = store.sadd("k", &members(&["a", "b"])).await.unwrap();
        assert_eq!(added, 2);

        let added = store.sadd("k", &members(&["b", "c"])).await.unwrap();
        assert_eq!(added, 1);

        assert_eq!(store.scard("k").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_sadd_empty_creates_entry() {
        let store = MemorySetStore::new();
        let added = store.sadd("k", &[]).await.unwrap();
        assert_eq!(added, 0);
        assert_eq!(store.key_count().await, 1);
        assert!(store.smembers("k").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sinter_missing_key_is_empty() {
        let store = MemorySetStore::new();
        store.sadd("a", &members(&["x", "y"])).await.unwrap();

        let result = store.sinter(&["a", "missing"]).await.unwrap();
        assert!(result.is_empty());

        let result = store.sinter(&["missing"]).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_sinter_three_way() {
        let store = MemorySetStore::new();
        store.sadd("a", &members(&["x", "y", "z"])).await.unwrap();
        store.sadd("b", &members(&["y", "z"])).await.unwrap();
        store.sadd("c", &members(&["z", "w"])).await.unwrap();

        let result = store.sinter(&["a", "b", "c"]).await.unwrap();
        assert_eq!(result, HashSet::from(["z".to_string()]));
    }

    #[tokio::test]
    async fn test_smembers_missing_key() {
        let store = MemorySetStore::new();
        assert!(store.smembers("nope").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_flush() {
        let store = MemorySetStore::new();
        store.sadd("k", &members(&["a"])).await.unwrap();
        store.flush().await;
        assert_eq!(store.key_count().await, 0);
    }
}

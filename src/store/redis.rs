//! Redis-backed set store.

use super::SetStore;
use crate::config::Config;
use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;
use std::collections::HashSet;
use std::time::Duration;
use tracing::debug;

/// Set store backed by a Redis server.
///
/// Uses a multiplexed `ConnectionManager`, so the store is cheap to clone
/// and safe to share across tasks. Reconnection is handled by the manager;
/// individual command failures are surfaced to the caller as `StoreError`
/// without retrying.
#[derive(Clone)]
pub struct RedisSetStore {
    conn: ConnectionManager,
}

impl RedisSetStore {
    /// Connect to Redis at `url`.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let client = redis::Client::open(url).map_err(map_redis_err)?;
        let conn = ConnectionManager::new(client).await.map_err(map_redis_err)?;
        debug!("Connected to Redis at {}", url);
        Ok(Self { conn })
    }

    /// Connect to Redis using the loaded configuration.
    ///
    /// Applies the configured response timeout to every command.
    pub async fn from_config(config: &Config) -> StoreResult<Self> {
        let client = redis::Client::open(config.redis_url.as_str()).map_err(map_redis_err)?;
        let manager_config = ConnectionManagerConfig::new()
            .set_response_timeout(Duration::from_secs(config.response_timeout));
        let conn = ConnectionManager::new_with_config(client, manager_config)
            .await
            .map_err(map_redis_err)?;
        debug!("Connected to Redis at {}", config.redis_url);
        Ok(Self { conn })
    }
}

#[async_trait]
impl SetStore for RedisSetStore {
    async fn sadd(&self, key: &str, members: &[String]) -> StoreResult<u64> {
        // SADD requires at least one member; an empty batch is a no-op
        // because Redis cannot represent an empty set anyway.
        if members.is_empty() {
            return Ok(0);
        }
        let mut conn = self.conn.clone();
        conn.sadd(key, members).await.map_err(map_redis_err)
    }

    async fn sinter(&self, keys: &[&str]) -> StoreResult<HashSet<String>> {
        let mut conn = self.conn.clone();
        conn.sinter(keys).await.map_err(map_redis_err)
    }

    async fn smembers(&self, key: &str) -> StoreResult<HashSet<String>> {
        let mut conn = self.conn.clone();
        conn.smembers(key).await.map_err(map_redis_err)
    }

    async fn scard(&self, key: &str) -> StoreResult<u64> {
        let mut conn = self.conn.clone();
        conn.scard(key).await.map_err(map_redis_err)
    }
}

/// Map a Redis client error onto the store error taxonomy.
fn map_redis_err(err: redis::RedisError) -> StoreError {
    if err.is_timeout() {
        StoreError::Timeout
    } else if err.is_io_error() || err.is_connection_refusal() || err.is_connection_dropped() {
        StoreError::Connection(err.to_string())
    } else {
        StoreError::Protocol(err.to_string())
    }
}

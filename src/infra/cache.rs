//! Redis cache implementation.
//!
//! JSON values over a shared `ConnectionManager`. Sessions are the only
//! keyspace the application writes.

use redis::{aio::ConnectionManager, AsyncCommands, Client, RedisError};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::{RedisConfig, CACHE_PREFIX_SESSION};
use crate::errors::{AppError, AppResult};

/// Redis cache wrapper with connection pooling.
#[derive(Clone)]
pub struct Cache {
    connection: ConnectionManager,
}

impl Cache {
    /// Connect to the configured Redis server.
    pub async fn connect(config: &RedisConfig) -> AppResult<Self> {
        let client = Client::open(config.url()).map_err(cache_error)?;
        let connection = ConnectionManager::new(client).await.map_err(cache_error)?;

        tracing::info!("Redis cache connected ({}:{})", config.host, config.port);

        Ok(Self { connection })
    }

    // =========================================================================
    // Generic Cache Operations
    // =========================================================================

    /// Get a value from cache.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(key).await.map_err(cache_error)?;

        match value {
            Some(json) => {
                let parsed = serde_json::from_str(&json).map_err(|e| {
                    AppError::internal(format!("Cache deserialization error: {}", e))
                })?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Set a value in cache with a TTL in seconds.
    pub async fn set_with_ttl<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl_seconds: u64,
    ) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let json = serde_json::to_string(value)
            .map_err(|e| AppError::internal(format!("Cache serialization error: {}", e)))?;

        conn.set_ex::<_, _, ()>(key, json, ttl_seconds)
            .await
            .map_err(cache_error)?;

        Ok(())
    }

    /// Delete a value from cache.
    pub async fn delete(&self, key: &str) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let _: () = conn.del(key).await.map_err(cache_error)?;
        Ok(())
    }

    // =========================================================================
    // Session Cache Operations
    // =========================================================================

    /// Store session data.
    pub async fn set_session<T: Serialize>(
        &self,
        session_id: &str,
        data: &T,
        ttl_seconds: u64,
    ) -> AppResult<()> {
        self.set_with_ttl(&session_key(session_id), data, ttl_seconds)
            .await
    }

    /// Get session data.
    pub async fn get_session<T: DeserializeOwned>(&self, session_id: &str) -> AppResult<Option<T>> {
        self.get(&session_key(session_id)).await
    }

    /// Delete session.
    pub async fn delete_session(&self, session_id: &str) -> AppResult<()> {
        self.delete(&session_key(session_id)).await
    }
}

fn session_key(session_id: &str) -> String {
    format!("{}{}", CACHE_PREFIX_SESSION, session_id)
}

/// Convert Redis error to AppError.
fn cache_error(e: RedisError) -> AppError {
    tracing::error!("Redis error: {}", e);
    AppError::internal(format!("Cache error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_keys_are_prefixed() {
        assert_eq!(session_key("abc"), "session:abc");
    }
}

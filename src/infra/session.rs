//! Server-side session storage.
//!
//! The cookie carries an opaque id; the store maps it to a [`Principal`].
//! Redis is used when enabled, an in-process map otherwise.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{Duration, Instant};

use super::cache::Cache;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Minimal identity kept in a session. The user itself is reloaded per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: i32,
    pub role: String,
}

/// Create a new random session id.
pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, session_id: &str) -> AppResult<Option<Principal>>;

    /// Store or refresh a session for `ttl_seconds`
    async fn save(&self, session_id: &str, principal: &Principal, ttl_seconds: u64)
        -> AppResult<()>;

    async fn remove(&self, session_id: &str) -> AppResult<()>;
}

/// Sessions in Redis under the `session:` prefix.
pub struct RedisSessionStore {
    cache: Cache,
}

impl RedisSessionStore {
    pub fn new(cache: Cache) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, session_id: &str) -> AppResult<Option<Principal>> {
        self.cache.get_session(session_id).await
    }

    async fn save(
        &self,
        session_id: &str,
        principal: &Principal,
        ttl_seconds: u64,
    ) -> AppResult<()> {
        self.cache
            .set_session(session_id, principal, ttl_seconds)
            .await
    }

    async fn remove(&self, session_id: &str) -> AppResult<()> {
        self.cache.delete_session(session_id).await
    }
}

/// Sessions held in process memory; lost on restart.
#[derive(Default, Clone)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, (Principal, Instant)>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, session_id: &str) -> AppResult<Option<Principal>> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(session_id)
            .filter(|(_, expires_at)| *expires_at > Instant::now())
            .map(|(principal, _)| principal.clone()))
    }

    async fn save(
        &self,
        session_id: &str,
        principal: &Principal,
        ttl_seconds: u64,
    ) -> AppResult<()> {
        let expires_at = Instant::now() + Duration::from_secs(ttl_seconds);
        let mut sessions = self.sessions.write().await;
        // drop expired entries while holding the write lock
        let now = Instant::now();
        sessions.retain(|_, (_, at)| *at > now);
        sessions.insert(session_id.to_string(), (principal.clone(), expires_at));
        Ok(())
    }

    async fn remove(&self, session_id: &str) -> AppResult<()> {
        self.sessions.write().await.remove(session_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal() -> Principal {
        Principal {
            user_id: 1,
            role: "Superuser".to_string(),
        }
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemorySessionStore::new();
        store.save("abc", &principal(), 60).await.unwrap();

        assert_eq!(store.load("abc").await.unwrap(), Some(principal()));
        assert_eq!(store.load("other").await.unwrap(), None);

        store.remove("abc").await.unwrap();
        assert_eq!(store.load("abc").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_expires() {
        let store = MemorySessionStore::new();
        store.save("abc", &principal(), 0).await.unwrap();
        assert_eq!(store.load("abc").await.unwrap(), None);
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(new_session_id(), new_session_id());
    }
}

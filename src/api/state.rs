//! Application state - Dependency injection container.
//!
//! Handlers reach services, the session store and configuration through
//! this struct only.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Cache, Database, MemorySessionStore, RedisSessionStore, SessionStore};
use crate::services::{ServiceContainer, Services};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<dyn ServiceContainer>,
    pub sessions: Arc<dyn SessionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state with manually injected parts.
    ///
    /// Tests use this with `MockServiceContainer`.
    pub fn new(
        services: Arc<dyn ServiceContainer>,
        sessions: Arc<dyn SessionStore>,
        config: Config,
    ) -> Self {
        Self {
            services,
            sessions,
            config: Arc::new(config),
        }
    }

    /// Build the production state: services over the database, and
    /// Redis-backed sessions when Redis is enabled.
    pub async fn from_config(database: &Database, config: Config) -> AppResult<Self> {
        let services = Arc::new(Services::from_connection(database.get_connection()));

        let sessions: Arc<dyn SessionStore> = if config.redis.enabled {
            let cache = Cache::connect(&config.redis).await?;
            Arc::new(RedisSessionStore::new(cache))
        } else {
            tracing::info!("Redis disabled, keeping sessions in memory");
            Arc::new(MemorySessionStore::new())
        };

        Ok(Self::new(services, sessions, config))
    }

    /// Session lifetime in seconds.
    pub fn session_max_age(&self) -> u64 {
        self.config.session.max_age
    }
}

//! Application settings loaded from `config/<env>.yml` with environment overrides.

use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde::Deserialize;

use super::constants::{
    CONFIG_PATH_TEMPLATE, DEFAULT_ENV, DEFAULT_POSTGRES_PORT, DEFAULT_REDIS_HOST,
    DEFAULT_REDIS_POOL_SIZE, DEFAULT_REDIS_PORT, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_SESSION_MAX_AGE_SECONDS, DEFAULT_SQLITE_FILE, DEFAULT_SWAGGER_PATH, DIALECT_POSTGRES,
    DIALECT_SQLITE, ENV_PREFIX,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub extension: ExtensionConfig,
    pub swagger: SwaggerConfig,
    pub session: SessionConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub dialect: String,
    pub host: String,
    pub port: String,
    pub dbname: String,
    pub username: String,
    password: String,
    /// Drop and re-create every table on startup
    pub migration: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dialect: DIALECT_SQLITE.to_string(),
            host: DEFAULT_SQLITE_FILE.to_string(),
            port: String::new(),
            dbname: String::new(),
            username: String::new(),
            password: String::new(),
            migration: false,
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("dialect", &self.dialect)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("migration", &self.migration)
            .finish()
    }
}

impl DatabaseConfig {
    /// Build the connection URL for the configured dialect.
    pub fn url(&self) -> AppResult<String> {
        match self.dialect.as_str() {
            DIALECT_SQLITE => {
                if self.host.contains(":memory:") {
                    Ok("sqlite::memory:".to_string())
                } else {
                    Ok(format!("sqlite://{}?mode=rwc", self.host))
                }
            }
            DIALECT_POSTGRES => {
                let port = if self.port.is_empty() {
                    DEFAULT_POSTGRES_PORT
                } else {
                    self.port.as_str()
                };
                Ok(format!(
                    "postgres://{}:{}@{}:{}/{}",
                    self.username, self.password, self.host, port, self.dbname
                ))
            }
            other => Err(AppError::internal(format!(
                "Unsupported database dialect: {}",
                other
            ))),
        }
    }

    /// Connection target safe for logging.
    pub fn target(&self) -> String {
        if self.port.is_empty() {
            self.host.clone()
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// In-memory SQLite settings used by tests and local experiments.
    pub fn in_memory() -> Self {
        Self {
            host: "file::memory:".to_string(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Store sessions in Redis instead of process memory
    pub enabled: bool,
    /// Read for compatibility with existing config files. Sessions share one
    /// multiplexed `ConnectionManager`, so no pool is sized from this.
    pub connection_pool_size: u32,
    pub host: String,
    pub port: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            connection_pool_size: DEFAULT_REDIS_POOL_SIZE,
            host: DEFAULT_REDIS_HOST.to_string(),
            port: DEFAULT_REDIS_PORT.to_string(),
        }
    }
}

impl RedisConfig {
    pub fn url(&self) -> String {
        format!("redis://{}:{}", self.host, self.port)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    /// Seed master data on startup
    pub master_generator: bool,
    pub security_enabled: bool,
    pub cors_enabled: bool,
    pub csrf_enabled: bool,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SwaggerConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for SwaggerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: DEFAULT_SWAGGER_PATH.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session lifetime in seconds
    pub max_age: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_age: DEFAULT_SESSION_MAX_AGE_SECONDS,
        }
    }
}

impl Config {
    /// Load `config/<env>.yml`, then apply `VET_CLINIC_*` environment overrides.
    ///
    /// Nested keys use `__` as the separator, e.g. `VET_CLINIC_DATABASE__HOST`.
    pub fn load(env: Option<&str>) -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let env = env.unwrap_or(DEFAULT_ENV);
        let path = CONFIG_PATH_TEMPLATE.replace("{}", env);
        tracing::debug!("Loading configuration from {}", path);

        Figment::new()
            .merge(Yaml::file(&path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| AppError::internal(format!("Failed to read {}: {}", path, e)))
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_sqlite_file() {
        let config = Config::default();
        assert_eq!(config.database.dialect, DIALECT_SQLITE);
        assert_eq!(config.database.url().unwrap(), "sqlite://sqlite.db?mode=rwc");
        assert_eq!(config.session.max_age, 86_400);
        assert!(!config.redis.enabled);
    }

    #[test]
    fn test_memory_sqlite_url() {
        let db = DatabaseConfig::in_memory();
        assert_eq!(db.url().unwrap(), "sqlite::memory:");
    }

    #[test]
    fn test_postgres_url() {
        let db = DatabaseConfig {
            dialect: "postgres".into(),
            host: "db".into(),
            port: String::new(),
            dbname: "clinic".into(),
            username: "vet".into(),
            password: "secret".into(),
            migration: false,
        };
        assert_eq!(db.url().unwrap(), "postgres://vet:secret@db:5432/clinic");
        assert!(!format!("{:?}", db).contains("secret"));
    }

    #[test]
    fn test_unknown_dialect_is_rejected() {
        let db = DatabaseConfig {
            dialect: "mysql".into(),
            ..DatabaseConfig::default()
        };
        assert!(db.url().is_err());
    }

    #[test]
    fn test_yaml_sections_are_read() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/unit.yml",
                r#"
database:
  dialect: postgres
  host: localhost
  migration: true
redis:
  enabled: true
  connection_pool_size: 4
  port: "6380"
extension:
  master_generator: true
swagger:
  enabled: true
  path: /docs
"#,
            )?;
            jail.set_env("VET_CLINIC_SERVER__PORT", "9000");

            let config = Config::load(Some("unit")).expect("config should load");
            assert_eq!(config.database.dialect, "postgres");
            assert!(config.database.migration);
            assert_eq!(config.redis.url(), "redis://127.0.0.1:6380");
            assert_eq!(config.redis.connection_pool_size, 4);
            assert!(config.extension.master_generator);
            assert_eq!(config.swagger.path, "/docs");
            assert_eq!(config.server.port, 9000);
            Ok(())
        });
    }
}

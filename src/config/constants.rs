//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Environment
// =============================================================================

/// Environment variable selecting the configuration file
pub const ENV_VAR: &str = "VET_CLINIC_ENV";

/// Prefix for environment overrides of configuration values
pub const ENV_PREFIX: &str = "VET_CLINIC_";

/// Configuration file location, `{}` is replaced by the environment name
pub const CONFIG_PATH_TEMPLATE: &str = "config/{}.yml";

/// Environment used when none is given
pub const DEFAULT_ENV: &str = "develop";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// Database
// =============================================================================

pub const DIALECT_SQLITE: &str = "sqlite3";
pub const DIALECT_POSTGRES: &str = "postgres";

/// Default SQLite database file
pub const DEFAULT_SQLITE_FILE: &str = "sqlite.db";

/// Default PostgreSQL port
pub const DEFAULT_POSTGRES_PORT: &str = "5432";

// =============================================================================
// Cache (Redis)
// =============================================================================

pub const DEFAULT_REDIS_HOST: &str = "127.0.0.1";
pub const DEFAULT_REDIS_PORT: &str = "6379";
pub const DEFAULT_REDIS_POOL_SIZE: u32 = 10;

/// Cache key prefix for session data
pub const CACHE_PREFIX_SESSION: &str = "session:";

// =============================================================================
// Sessions
// =============================================================================

/// Name of the cookie carrying the session id
pub const SESSION_COOKIE: &str = "Authorization";

/// Session lifetime in seconds, refreshed on every authenticated request
pub const DEFAULT_SESSION_MAX_AGE_SECONDS: u64 = 86_400;

// =============================================================================
// Authentication & Security
// =============================================================================

/// bcrypt work factor for stored passwords
pub const PASSWORD_HASH_COST: u32 = 12;

pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// bcrypt ignores input past 72 bytes
pub const MAX_PASSWORD_LENGTH: u64 = 72;

// =============================================================================
// Slugs
// =============================================================================

pub const SLUG_MAX_LENGTH: usize = 40;

// =============================================================================
// Domain Defaults
// =============================================================================

/// Status forced on every new lead
pub const LEAD_STATUS_OPEN: &str = "open";

/// Maximum length of personal name fields
pub const MAX_NAME_LENGTH: u64 = 255;

// =============================================================================
// Routes
// =============================================================================

pub const API_V1: &str = "/v1";
pub const DEFAULT_SWAGGER_PATH: &str = "/swagger-ui";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

//! Database connection and schema management.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};
use sea_orm_migration::MigratorTrait;

use crate::config::DatabaseConfig;
use crate::errors::AppResult;

pub mod migrations;

pub use migrations::Migrator;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open a connection pool for the configured dialect.
    ///
    /// Migrations are not applied here; see [`Database::prepare_schema`].
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let url = config.url()?;
        let in_memory = url.contains(":memory:");
        let mut options = ConnectOptions::new(url);
        options.sqlx_logging(false);
        if in_memory {
            // every pooled connection would otherwise see its own empty database
            options.max_connections(1).min_connections(1);
        }

        let connection = SeaDatabase::connect(options).await?;
        tracing::info!(
            "Database connected ({} at {})",
            config.dialect,
            config.target()
        );

        Ok(Self { connection })
    }

    /// Wrap an existing connection.
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Re-create every table when `reset` is set, otherwise apply pending migrations.
    pub async fn prepare_schema(&self, reset: bool) -> Result<(), DbErr> {
        if reset {
            tracing::warn!("Dropping and re-creating all tables");
            self.fresh_migrations().await
        } else {
            self.run_migrations().await
        }
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::seaql_migrations;

        let applied: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        let migrations: Vec<(String, bool)> = Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect();

        Ok(migrations)
    }

    /// Drop every table and run all migrations again.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

//! Serve command - Starts the HTTP server.

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{seed_master_data, Database, Persistence};

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let db = Database::connect(&config.database).await?;
    db.ping().await?;

    db.prepare_schema(config.database.migration).await?;
    tracing::info!("Database schema ready");

    if config.extension.master_generator {
        let uow = Persistence::new(db.get_connection());
        seed_master_data(&uow).await?;
    }
    if config.extension.csrf_enabled {
        tracing::warn!("extension.csrf_enabled is set but CSRF protection is not supported");
    }

    let addr = config.server_addr();
    let app_state = AppState::from_config(&db, config).await?;
    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

//! Seed command - Inserts master data.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{seed_master_data, Database, Persistence};

/// Apply pending migrations, then insert master data
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config.database).await?;
    db.run_migrations().await?;

    let uow = Persistence::new(db.get_connection());
    seed_master_data(&uow).await
}

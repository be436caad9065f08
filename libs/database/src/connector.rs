use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::PostgresConfig;
use crate::error::{DatabaseError, DatabaseResult};
use crate::retry::{RetryConfig, retry_with_backoff};

/// Open a pool with the given settings
pub async fn connect(config: &PostgresConfig) -> DatabaseResult<DatabaseConnection> {
    let db = Database::connect(config.clone().into_connect_options())
        .await
        .map_err(DatabaseError::ConnectionFailed)?;

    info!(
        max_connections = config.max_connections,
        "Connected to PostgreSQL"
    );
    Ok(db)
}

/// Like [`connect`], retrying with exponential backoff while the server comes up
pub async fn connect_with_retry(
    config: &PostgresConfig,
    retry: RetryConfig,
) -> DatabaseResult<DatabaseConnection> {
    retry_with_backoff(|| connect(config), retry).await
}

/// Apply every pending migration of `M`
pub async fn run_migrations<M: MigratorTrait>(db: &DatabaseConnection) -> DatabaseResult<()> {
    info!("Running database migrations");
    M::up(db, None)
        .await
        .map_err(DatabaseError::MigrationFailed)?;
    info!("Database migrations completed");
    Ok(())
}

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::debug;

use crate::error::{DatabaseError, DatabaseResult};

/// `SELECT 1` against the pool, used by the readiness check
pub async fn check_health(db: &DatabaseConnection) -> DatabaseResult<()> {
    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
    db.query_one_raw(stmt)
        .await
        .map_err(DatabaseError::HealthCheckFailed)?;

    debug!("PostgreSQL health check passed");
    Ok(())
}

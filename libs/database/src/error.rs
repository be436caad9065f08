use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(#[source] DbErr),

    #[error("Migration failed: {0}")]
    MigrationFailed(#[source] DbErr),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(#[source] DbErr),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

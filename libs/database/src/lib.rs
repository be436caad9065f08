//! PostgreSQL plumbing for the bookkeeping services: pool configuration,
//! connecting with retry, running migrations and health checks.
//!
//! ```ignore
//! use database::{PostgresConfig, RetryConfig};
//! use core_config::FromEnv;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = database::connect_with_retry(&config, RetryConfig::default()).await?;
//! database::run_migrations::<migration::Migrator>(&db).await?;
//! ```

mod config;
mod connector;
mod error;
mod health;
mod retry;

pub use config::PostgresConfig;
pub use connector::{connect, connect_with_retry, run_migrations};
pub use error::{DatabaseError, DatabaseResult};
pub use health::check_health;
pub use retry::{RetryConfig, retry_with_backoff};

pub use sea_orm::DatabaseConnection;

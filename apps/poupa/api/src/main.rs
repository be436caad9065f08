//! Poupa API server
//!
//! Serves the users and categories routers under `/api`. With `DATABASE_URL`
//! set, data lives in PostgreSQL and migrations run at startup; without it,
//! in-memory storage is used (development only).

use core_config::tracing::{init_tracing, install_color_eyre};
use database::RetryConfig;
use tracing::info;

mod config;
mod health;
mod openapi;
mod server;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = match &config.database {
        Some(database) => {
            let db = database::connect_with_retry(database, RetryConfig::default()).await?;
            database::run_migrations::<migration::Migrator>(&db).await?;
            Some(db)
        }
        None => {
            tracing::warn!("DATABASE_URL is not set, using in-memory storage");
            None
        }
    };

    let api = server::api_routes(db.as_ref());
    let app = server::create_router(api, db.clone());

    server::serve(app, &config.server).await?;

    if let Some(db) = db {
        match db.close().await {
            Ok(()) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    }

    info!("Poupa API shutdown complete");
    Ok(())
}

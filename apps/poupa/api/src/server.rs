use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use core_common::MessageResponse;
use core_config::server::ServerConfig;
use database::DatabaseConnection;
use domain_categories::{
    CategoryRepository, CategoryService, InMemoryCategoryRepository, PgCategoryRepository,
};
use domain_users::{
    Argon2HashService, InMemoryUserRepository, PgUserRepository, UserRepository, UserService,
};
use std::io;
use tokio::signal;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::openapi::ApiDoc;

/// Domain routers over PostgreSQL when a pool is given, otherwise over memory
pub fn api_routes(db: Option<&DatabaseConnection>) -> Router {
    match db {
        Some(db) => domain_routes(
            PgCategoryRepository::new(db.clone()),
            PgUserRepository::new(db.clone()),
        ),
        None => domain_routes(
            InMemoryCategoryRepository::new(),
            InMemoryUserRepository::new(),
        ),
    }
}

fn domain_routes<C, U>(categories: C, users: U) -> Router
where
    C: CategoryRepository + 'static,
    U: UserRepository + 'static,
{
    Router::new()
        .nest(
            "/category",
            domain_categories::handlers::router(CategoryService::new(categories)),
        )
        .nest(
            "/user",
            domain_users::handlers::router(UserService::new(users, Argon2HashService::new())),
        )
}

/// API under `/api`, health checks, OpenAPI document and request tracing
pub fn create_router(api: Router, db: Option<DatabaseConnection>) -> Router {
    Router::new()
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/api", api)
        .merge(health::router(db))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new("Resource not found.")),
    )
}

/// Bind and serve until SIGINT or SIGTERM
pub async fn serve(router: Router, config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C signal, shutting down gracefully"),
        _ = terminate => info!("Received SIGTERM signal, shutting down gracefully"),
    }
}

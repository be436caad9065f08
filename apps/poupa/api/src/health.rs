//! Liveness and readiness checks.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use database::DatabaseConnection;
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct ReadyResponse {
    status: &'static str,
    database: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Pings PostgreSQL when it is configured. In-memory storage is always ready.
async fn ready(State(db): State<Option<DatabaseConnection>>) -> Response {
    let Some(db) = db else {
        return Json(ReadyResponse {
            status: "ready",
            database: "in-memory",
        })
        .into_response();
    };

    match database::check_health(&db).await {
        Ok(()) => Json(ReadyResponse {
            status: "ready",
            database: "connected",
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyResponse {
                    status: "not ready",
                    database: "disconnected",
                }),
            )
                .into_response()
        }
    }
}

pub fn router(db: Option<DatabaseConnection>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(db)
}

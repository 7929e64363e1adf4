//! 健康检查路由

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use kiosk_adapter_postgres::check_connection;
use serde::Serialize;
use sqlx::PgPool;

pub fn health_routes(pool: PgPool) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .with_state(pool)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: Vec<ServiceCheck>,
}

#[derive(Debug, Serialize)]
pub struct ServiceCheck {
    pub name: String,
    pub healthy: bool,
}

async fn readiness_check(State(pool): State<PgPool>) -> Json<ReadinessResponse> {
    let postgres_healthy = check_connection(&pool).await.is_ok();

    Json(ReadinessResponse {
        ready: postgres_healthy,
        checks: vec![ServiceCheck {
            name: "postgres".to_string(),
            healthy: postgres_healthy,
        }],
    })
}

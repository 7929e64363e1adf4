//! product-api - Product CRUD 服务

mod api;
mod domain;
mod infrastructure;

use std::sync::Arc;

use kiosk_adapter_postgres::MigrationManager;
use kiosk_bootstrap::run;
use tracing::info;

use api::AppState;
use infrastructure::persistence::{PostgresProductRepository, migrations};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    run("config", |infra| async move {
        info!("Initializing product service...");

        let pool = infra.postgres_pool();

        // 应用数据库迁移
        let manager = MigrationManager::new(pool.clone());
        let applied = manager.migrate(&migrations()).await?;
        info!(applied, "Migrations up to date");

        let repo = Arc::new(PostgresProductRepository::new(pool.clone()));
        let state = AppState { repo };

        Ok(api::product_routes(state).merge(api::health_routes(pool)))
    })
    .await
}

//! 基础设施资源

use kiosk_adapter_postgres::{check_connection, create_pool};
use kiosk_config::AppConfig;
use kiosk_errors::AppResult;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

/// 服务基础设施
///
/// 持有服务生命周期内共享的资源（目前只有数据库连接池）。
/// 每个请求从池中借出自己的连接，请求之间不共享会话。
pub struct Infrastructure {
    postgres: PgPool,
}

impl Infrastructure {
    /// 根据配置创建基础设施资源
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        let postgres = create_pool(
            config.database.url.expose_secret(),
            config.database.max_connections,
        )
        .await?;
        check_connection(&postgres).await?;

        info!(
            max_connections = config.database.max_connections,
            "PostgreSQL pool ready"
        );

        Ok(Self { postgres })
    }

    pub fn postgres_pool(&self) -> PgPool {
        self.postgres.clone()
    }
}

//! PostgreSQL 迁移管理模块
//!
//! 启动时按版本应用 SQL 迁移，每个迁移在独立事务中执行

use kiosk_errors::{AppError, AppResult};
use sqlx::PgPool;
use tracing::{info, warn};

/// 迁移定义
#[derive(Debug, Clone)]
pub struct Migration {
    pub version: i64,
    pub name: String,
    pub up_sql: String,
    pub checksum: String,
}

impl Migration {
    pub fn new(version: i64, name: impl Into<String>, up_sql: impl Into<String>) -> Self {
        let up_sql = up_sql.into();
        let checksum = checksum_of(&up_sql);
        Self {
            version,
            name: name.into(),
            up_sql,
            checksum,
        }
    }
}

/// 计算迁移 SQL 的校验和
fn checksum_of(sql: &str) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    sql.hash(&mut hasher);
    format!("{:x}", hasher.finish())
}

/// 已应用的迁移记录
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MigrationRecord {
    pub version: i64,
    pub name: String,
    pub applied_at: chrono::DateTime<chrono::Utc>,
    pub checksum: String,
}

/// 迁移管理器
pub struct MigrationManager {
    pool: PgPool,
}

const MIGRATIONS_TABLE: &str = "schema_migrations";

impl MigrationManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 初始化迁移表
    async fn init(&self) -> AppResult<()> {
        let create_sql = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                version BIGINT PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                checksum VARCHAR(64) NOT NULL
            )
            "#,
            MIGRATIONS_TABLE
        );

        sqlx::query(&create_sql)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create migration table: {}", e)))?;

        Ok(())
    }

    /// 获取已应用的迁移
    pub async fn applied(&self) -> AppResult<Vec<MigrationRecord>> {
        let sql = format!(
            "SELECT version, name, applied_at, checksum FROM {} ORDER BY version ASC",
            MIGRATIONS_TABLE
        );

        let records = sqlx::query_as::<_, MigrationRecord>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get migrations: {}", e)))?;

        Ok(records)
    }

    /// 应用单个迁移（迁移 SQL 与记录写入在同一事务中）
    async fn apply(&self, migration: &Migration) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {}", e)))?;

        sqlx::query(&migration.up_sql)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::database(format!(
                    "Failed to apply migration {}: {}",
                    migration.version, e
                ))
            })?;

        let insert_sql = format!(
            "INSERT INTO {} (version, name, checksum) VALUES ($1, $2, $3)",
            MIGRATIONS_TABLE
        );
        sqlx::query(&insert_sql)
            .bind(migration.version)
            .bind(&migration.name)
            .bind(&migration.checksum)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to record migration: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit migration: {}", e)))?;

        info!(
            version = migration.version,
            name = %migration.name,
            "Migration applied"
        );

        Ok(())
    }

    /// 应用所有待处理的迁移，返回本次应用的数量
    ///
    /// 已应用的迁移会校验 checksum，不一致视为迁移被改动过，直接报错。
    pub async fn migrate(&self, migrations: &[Migration]) -> AppResult<u32> {
        self.init().await?;

        let applied = self.applied().await?;

        let mut pending: Vec<&Migration> = Vec::new();
        for migration in migrations {
            match applied.iter().find(|r| r.version == migration.version) {
                Some(record) if record.checksum != migration.checksum => {
                    return Err(AppError::internal(format!(
                        "Migration {} checksum mismatch - migration has been modified",
                        migration.version
                    )));
                }
                Some(_) => {
                    warn!(version = migration.version, "Migration already applied, skipping");
                }
                None => pending.push(migration),
            }
        }

        pending.sort_by_key(|m| m.version);

        let mut count = 0;
        for migration in pending {
            self.apply(migration).await?;
            count += 1;
        }

        Ok(count)
    }
}

//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use kiosk_errors::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::{Product, ProductRepository, QueryParameters};

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: &Product) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, brand, price)
            VALUES ($1, $2, $3)
            RETURNING id, name, brand, price
            "#,
        )
        .bind(&product.name)
        .bind(&product.brand)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create product: {}", e)))
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, brand, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get product: {}", e)))
    }

    async fn get_by_name_and_brand(&self, name: &str, brand: &str) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, brand, price
            FROM products
            WHERE name = $1 AND brand = $2
            LIMIT 1
            "#,
        )
        .bind(name)
        .bind(brand)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get product: {}", e)))
    }

    async fn get_all(&self, query: &QueryParameters) -> AppResult<Vec<Product>> {
        // 价格边界缺省时不参与过滤；ORDER BY id 让并发插入下分页保持稳定
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, brand, price
            FROM products
            WHERE ($1::numeric IS NULL OR price >= $1)
              AND ($2::numeric IS NULL OR price <= $2)
            ORDER BY id ASC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(query.min_price)
        .bind(query.max_price)
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list products: {}", e)))
    }

    async fn update(&self, product: &Product, id: i32) -> AppResult<Product> {
        // 契约要求覆盖全部四个字段，包括负载里的 id
        let updated = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET id = $1, name = $2, brand = $3, price = $4
            WHERE id = $5
            RETURNING id, name, brand, price
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.brand)
        .bind(product.price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update product: {}", e)))?;

        updated.ok_or_else(|| AppError::not_found("Product does not exist"))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete product: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Product does not exist"));
        }

        Ok(())
    }
}

//! 内存版 ProductRepository
//!
//! 与 PostgreSQL 实现语义一致，用于在无数据库的环境下
//! 测试数据访问契约（对应原实现的 InMemory 数据库测试）。

use async_trait::async_trait;
use kiosk_errors::{AppError, AppResult};
use tokio::sync::RwLock;

use crate::domain::{Product, ProductRepository, QueryParameters};

#[derive(Default)]
struct Inner {
    rows: Vec<Product>,
    next_id: i32,
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<Inner>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> AppResult<Product> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let created = Product {
            id: inner.next_id,
            ..product.clone()
        };
        inner.rows.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let inner = self.inner.read().await;
        Ok(inner.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn get_by_name_and_brand(&self, name: &str, brand: &str) -> AppResult<Option<Product>> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .iter()
            .find(|p| p.name == name && p.brand == brand)
            .cloned())
    }

    async fn get_all(&self, query: &QueryParameters) -> AppResult<Vec<Product>> {
        let inner = self.inner.read().await;

        let mut matching: Vec<Product> = inner
            .rows
            .iter()
            .filter(|p| query.min_price.is_none_or(|min| p.price >= min))
            .filter(|p| query.max_price.is_none_or(|max| p.price <= max))
            .cloned()
            .collect();

        // 与 SQL 实现相同的稳定顺序
        matching.sort_by_key(|p| p.id);

        Ok(matching
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit() as usize)
            .collect())
    }

    async fn update(&self, product: &Product, id: i32) -> AppResult<Product> {
        let mut inner = self.inner.write().await;
        let Some(index) = inner.rows.iter().position(|p| p.id == id) else {
            return Err(AppError::not_found("Product does not exist"));
        };

        // 全字段覆盖，包括负载里的 id
        inner.rows[index] = product.clone();
        Ok(inner.rows[index].clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        let Some(index) = inner.rows.iter().position(|p| p.id == id) else {
            return Err(AppError::not_found("Product does not exist"));
        };

        inner.rows.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(name: &str, brand: &str, price: Decimal) -> Product {
        Product {
            id: 0,
            name: name.to_string(),
            brand: brand.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn create_assigns_store_generated_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo
            .create(&product("Test Product", "Test Brand", Decimal::new(1099, 2)))
            .await
            .unwrap();
        let second = repo
            .create(&product("Other Product", "Test Brand", Decimal::new(209, 1)))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn create_then_get_by_id_round_trips() {
        let repo = InMemoryProductRepository::new();

        let created = repo
            .create(&product("Test Product", "Test Brand", Decimal::new(101, 1)))
            .await
            .unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Test Product");
        assert_eq!(fetched.brand, "Test Brand");
        assert_eq!(fetched.price, Decimal::new(101, 1));
    }

    #[tokio::test]
    async fn get_by_id_missing_returns_none() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.get_by_id(100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_by_name_and_brand_finds_first_match() {
        let repo = InMemoryProductRepository::new();
        let created = repo
            .create(&product("Test Product", "Test Brand", Decimal::from(10)))
            .await
            .unwrap();

        let found = repo
            .get_by_name_and_brand("Test Product", "Test Brand")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, created);

        let missing = repo
            .get_by_name_and_brand("Nonexistent Name", "Nonexistent Brand")
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn get_all_filters_by_inclusive_price_range() {
        let repo = InMemoryProductRepository::new();
        for price in [100, 200, 300] {
            repo.create(&product(
                &format!("Product {}", price),
                "Test Brand",
                Decimal::from(price),
            ))
            .await
            .unwrap();
        }

        let query = QueryParameters {
            min_price: Some(Decimal::from(150)),
            max_price: Some(Decimal::from(250)),
            ..Default::default()
        };
        let result = repo.get_all(&query).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].price, Decimal::from(200));
    }

    #[tokio::test]
    async fn get_all_without_bounds_returns_everything() {
        let repo = InMemoryProductRepository::new();
        for price in [100, 200, 300] {
            repo.create(&product(
                &format!("Product {}", price),
                "Test Brand",
                Decimal::from(price),
            ))
            .await
            .unwrap();
        }

        let result = repo.get_all(&QueryParameters::default()).await.unwrap();
        assert_eq!(result.len(), 3);
    }

    #[tokio::test]
    async fn get_all_clamps_page_size() {
        let repo = InMemoryProductRepository::new();
        for i in 0..150 {
            repo.create(&product(&format!("Product {}", i), "Test Brand", Decimal::from(i)))
                .await
                .unwrap();
        }

        let query = QueryParameters {
            size: 500,
            ..Default::default()
        };
        let result = repo.get_all(&query).await.unwrap();
        assert_eq!(result.len(), 100);
    }

    #[tokio::test]
    async fn get_all_pages_in_id_order() {
        let repo = InMemoryProductRepository::new();
        for i in 1..=5 {
            repo.create(&product(&format!("Product {}", i), "Test Brand", Decimal::from(i)))
                .await
                .unwrap();
        }

        let query = QueryParameters {
            page: 2,
            size: 2,
            ..Default::default()
        };
        let result = repo.get_all(&query).await.unwrap();

        let ids: Vec<i32> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let repo = InMemoryProductRepository::new();
        let existing = repo
            .create(&product("Existing Product", "Existing Brand", Decimal::from(10)))
            .await
            .unwrap();

        let payload = Product {
            id: 90,
            name: "Updated Product".to_string(),
            brand: "Updated Brand".to_string(),
            price: Decimal::from(20),
        };
        let updated = repo.update(&payload, existing.id).await.unwrap();

        assert_eq!(updated, payload);
        // id 也被负载覆盖
        assert!(repo.get_by_id(existing.id).await.unwrap().is_none());
        assert_eq!(repo.get_by_id(90).await.unwrap().unwrap(), payload);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found_and_leaves_store_unchanged() {
        let repo = InMemoryProductRepository::new();
        let existing = repo
            .create(&product("Existing Product", "Existing Brand", Decimal::from(10)))
            .await
            .unwrap();

        let payload = product("Updated Product", "Updated Brand", Decimal::from(20));
        let err = repo.update(&payload, 10000).await.unwrap_err();
        assert_eq!(err.detail(), "Product does not exist");

        let all = repo.get_all(&QueryParameters::default()).await.unwrap();
        assert_eq!(all, vec![existing]);
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let repo = InMemoryProductRepository::new();
        let existing = repo
            .create(&product("Existing Product", "Existing Brand", Decimal::from(50)))
            .await
            .unwrap();

        repo.delete(existing.id).await.unwrap();
        assert!(repo.get_by_id(existing.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_missing_id_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let err = repo.delete(84).await.unwrap_err();
        assert_eq!(err.detail(), "Product does not exist");
    }
}

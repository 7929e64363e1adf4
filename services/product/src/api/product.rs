//! Product 资源路由
//!
//! 每个 handler 做轻量校验，委托给仓储，把 AppError 映射为响应。

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use kiosk_errors::{AppError, AppResult};
use metrics::counter;
use tracing::{error, info};

use crate::domain::{Product, ProductRepository, QueryParameters};

const PRODUCT_NOT_FOUND: &str = "Product does not exist";
const DUPLICATE_PRODUCT: &str = "a product with the same name and brand already exists";

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ProductRepository>,
}

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/products", post(create_product).get(get_all_products))
        .route(
            "/api/products/{id}",
            get(get_product_by_id)
                .put(update_product)
                .delete(delete_product),
        )
        .with_state(state)
}

async fn create_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> AppResult<Json<Product>> {
    info!(name = %product.name, brand = %product.brand, "Creating product");

    // 唯一性检查与插入不是原子的：两个并发请求可能都通过检查。
    // 这是契约接受的竞争窗口，(name, brand) 上没有数据库约束。
    if let Some(existing) = state
        .repo
        .get_by_name_and_brand(&product.name, &product.brand)
        .await?
    {
        error!(
            id = existing.id,
            name = %product.name,
            brand = %product.brand,
            "Duplicate product"
        );
        return Err(AppError::conflict(DUPLICATE_PRODUCT));
    }

    let created = state.repo.create(&product).await?;
    counter!("products_created_total").increment(1);

    Ok(Json(created))
}

async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Product>> {
    info!(id, "Getting product");

    // 非正 id 直接拒绝，不触库
    if id <= 0 {
        return Err(AppError::validation("Invalid product id"));
    }

    match state.repo.get_by_id(id).await? {
        Some(product) => Ok(Json(product)),
        None => {
            info!(id, "Product does not exist");
            Err(AppError::not_found(PRODUCT_NOT_FOUND))
        }
    }
}

async fn get_all_products(
    State(state): State<AppState>,
    Query(query): Query<QueryParameters>,
) -> AppResult<Json<Vec<Product>>> {
    info!(page = query.page, size = query.size, "Listing products");

    query.validate()?;

    let products = state.repo.get_all(&query).await?;
    Ok(Json(products))
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(product): Json<Product>,
) -> AppResult<Json<Product>> {
    info!(id, "Updating product");

    // 撞到别的产品才算冲突，(name, brand) 指回自身时允许更新
    if let Some(existing) = state
        .repo
        .get_by_name_and_brand(&product.name, &product.brand)
        .await?
    {
        if existing.id != id {
            error!(
                id = existing.id,
                name = %product.name,
                brand = %product.brand,
                "Duplicate product"
            );
            return Err(AppError::conflict(DUPLICATE_PRODUCT));
        }
    }

    let updated = state.repo.update(&product, id).await?;
    counter!("products_updated_total").increment(1);

    Ok(Json(updated))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    info!(id, "Deleting product");

    state.repo.delete(id).await?;
    counter!("products_deleted_total").increment(1);

    Ok(StatusCode::OK)
}

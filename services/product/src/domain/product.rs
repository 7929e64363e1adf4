//! Product 领域模型

use async_trait::async_trait;
use kiosk_errors::AppResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::QueryParameters;

/// 产品
///
/// `id` 由数据库在创建时分配，请求负载中的 id 可省略。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub price: Decimal,
}

/// 产品数据访问接口
///
/// 唯一的规范接口：异步，update/delete 显式传目标 id。
/// 点查缺失返回 `None`，update/delete 缺失返回 `NotFound` 错误。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 插入新行，主键由数据库分配
    async fn create(&self, product: &Product) -> AppResult<Product>;

    /// 按主键点查
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Product>>;

    /// 按 (name, brand) 等值查找首个匹配，仅用于唯一性检查
    async fn get_by_name_and_brand(&self, name: &str, brand: &str) -> AppResult<Option<Product>>;

    /// 过滤 + 分页列表，无匹配时返回空序列
    async fn get_all(&self, query: &QueryParameters) -> AppResult<Vec<Product>>;

    /// 按 id 定位并覆盖全部字段（含 id），返回更新后的行
    async fn update(&self, product: &Product, id: i32) -> AppResult<Product>;

    /// 按 id 删除
    async fn delete(&self, id: i32) -> AppResult<()>;
}

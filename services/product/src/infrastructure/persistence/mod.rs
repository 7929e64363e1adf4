//! 持久化实现

#[cfg(test)]
mod memory;
mod product;

pub use product::PostgresProductRepository;

use kiosk_adapter_postgres::Migration;

/// products 表迁移
///
/// (name, brand) 故意不建唯一索引：唯一性由 API 层先查后写，
/// 两个并发请求可能同时通过检查并各自插入。这个竞争窗口是
/// 契约中已知且接受的，不在存储层修补。
pub fn migrations() -> Vec<Migration> {
    vec![Migration::new(
        1,
        "create_products",
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            brand TEXT NOT NULL,
            price NUMERIC(12, 2) NOT NULL
        )
        "#,
    )]
}

//! 领域模型与数据访问接口

mod product;
mod query;

pub use product::*;
pub use query::*;

//! 列表查询参数

use kiosk_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::Deserialize;

/// 页大小上限，请求更大的值时静默收紧
pub const MAX_PAGE_SIZE: u32 = 100;

const DEFAULT_PAGE_SIZE: u32 = 50;

/// 过滤/分页描述符
///
/// 每个列表请求新建，不持久化。价格边界为闭区间。
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryParameters {
    pub page: u32,
    pub size: u32,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            min_price: None,
            max_price: None,
        }
    }
}

impl QueryParameters {
    /// 校验价格区间
    pub fn validate(&self) -> AppResult<()> {
        let negative = |bound: Option<Decimal>| bound.is_some_and(|v| v < Decimal::ZERO);

        if negative(self.min_price) || negative(self.max_price) {
            return Err(AppError::validation("Invalid price range."));
        }

        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(AppError::validation("Invalid price range."));
            }
        }

        Ok(())
    }

    /// 实际页大小
    pub fn limit(&self) -> i64 {
        i64::from(self.size.min(MAX_PAGE_SIZE))
    }

    /// 跳过的行数：size * (page - 1)，page 为 1-based
    pub fn offset(&self) -> i64 {
        self.limit() * i64::from(self.page.saturating_sub(1))
    }
}

//! kiosk-errors - 统一错误处理
//!
//! 基于 RFC 7807 Problem Details 规范

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 转换为 HTTP 状态码
    ///
    /// 合同约定：除 NotFound/Conflict 外，所有失败都作为客户端错误
    /// 返回 400 并携带错误详情。
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// 错误详情（不带分类前缀）
    pub fn detail(&self) -> &str {
        match self {
            Self::NotFound(msg)
            | Self::Validation(msg)
            | Self::Conflict(msg)
            | Self::Database(msg)
            | Self::Internal(msg) => msg,
        }
    }

    /// 转换为 Problem Details
    pub fn to_problem_details(&self) -> ProblemDetails {
        ProblemDetails {
            r#type: self.problem_type(),
            title: self.problem_title(),
            status: self.status_code().as_u16(),
            detail: self.detail().to_string(),
            instance: None,
        }
    }

    fn problem_type(&self) -> String {
        match self {
            Self::NotFound(_) => "https://api.kiosk.rs/problems/not-found".to_string(),
            Self::Validation(_) => "https://api.kiosk.rs/problems/validation".to_string(),
            Self::Conflict(_) => "https://api.kiosk.rs/problems/conflict".to_string(),
            Self::Database(_) => "https://api.kiosk.rs/problems/database".to_string(),
            Self::Internal(_) => "https://api.kiosk.rs/problems/internal".to_string(),
        }
    }

    fn problem_title(&self) -> String {
        match self {
            Self::NotFound(_) => "Resource Not Found".to_string(),
            Self::Validation(_) => "Validation Error".to_string(),
            Self::Conflict(_) => "Conflict".to_string(),
            Self::Database(_) => "Database Error".to_string(),
            Self::Internal(_) => "Internal Error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_problem_details())).into_response()
    }
}

/// RFC 7807 Problem Details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

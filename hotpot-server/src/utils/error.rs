//! 统一错误处理
//!
//! 提供应用级错误类型和 HTTP 映射：
//!
//! | 变体 | 状态码 | 说明 |
//! |------|--------|------|
//! | NotFound | 404 | 资源不存在 |
//! | Validation | 400 | 输入验证失败 |
//! | Database | 500 | 存储层错误 |
//!
//! Validation and NotFound are expected caller-facing outcomes and are
//! never logged as faults; Database errors are logged via `tracing`
//! and surfaced with a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use super::AppResponse;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("Database error: {0}")]
    /// 存储层错误 (500)
    Database(String),
}

/// Result type for handlers
pub type AppResult<T> = Result<T, AppError>;

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
        };

        let body = Json(AppResponse::<()>::error(message));
        (status, body).into_response()
    }
}

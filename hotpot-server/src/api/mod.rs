//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`tables`] - 桌台列表 (含预订视图) 和创建
//! - [`reservations`] - 预订创建/取消/按日期批量删除
//! - [`init`] - 桌台库存重置

pub mod health;
pub mod init;
pub mod reservations;
pub mod tables;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(tables::router())
        .merge(reservations::router())
        .merge(init::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

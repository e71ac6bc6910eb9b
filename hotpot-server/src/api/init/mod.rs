//! Init API 模块 - 桌台库存重置

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    // POST: the reset is destructive, so it never hangs off a GET
    Router::new().route("/api/init", post(handler::reset_tables))
}

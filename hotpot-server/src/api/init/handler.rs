//! Init API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::TableRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct InitResponse {
    success: bool,
    message: String,
}

/// POST /api/init - 重置桌台库存
///
/// Drops every existing table and seeds a fresh numbered set.
/// Reservations are left in place; any now pointing at a deleted
/// table simply stop appearing in the table views.
pub async fn reset_tables(State(state): State<ServerState>) -> AppResult<Json<InitResponse>> {
    let repo = TableRepository::new(state.store.clone());
    let count = repo
        .reset_and_seed(state.config.seed_table_count)
        .await
        .map_err(AppError::from)?;

    tracing::info!(count, "Table inventory reset");
    Ok(Json(InitResponse {
        success: true,
        message: format!("Seeded {count} tables"),
    }))
}

//! Tables API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::TableRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::{TableCreate, TableView};

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    success: bool,
    id: String,
}

/// GET /api/tables - 获取所有桌台及其预订视图
///
/// The join is recomputed on every request, so the views are always
/// fresh relative to the reservation set.
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<TableView>>> {
    let views = state.booking.table_views().await.map_err(AppError::from)?;
    Ok(Json(views))
}

/// POST /api/tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TableCreate>,
) -> AppResult<Json<CreatedResponse>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    if let Some(capacity) = payload.capacity
        && capacity < 1
    {
        return Err(AppError::validation("capacity must be at least 1"));
    }

    let repo = TableRepository::new(state.store.clone());
    let table = repo.create(payload).await.map_err(AppError::from)?;
    Ok(Json(CreatedResponse {
        success: true,
        id: table.id,
    }))
}

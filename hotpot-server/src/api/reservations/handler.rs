//! Reservations API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use tracing::debug;

use crate::booking::CreateError;
use crate::core::ServerState;
use crate::utils::time::parse_date;
use crate::utils::{AppError, AppResult};
use shared::models::{Rejection, Reservation, ReservationDraft};

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Rejection>,
}

#[derive(Debug, Serialize)]
pub struct CancelResponse {
    success: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepResponse {
    success: bool,
    deleted_count: u64,
}

/// GET /api/reservations - 获取所有预订 (createdAt 降序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = state
        .booking
        .list_reservations()
        .await
        .map_err(AppError::from)?;
    Ok(Json(reservations))
}

/// POST /api/reservations - 创建预订
///
/// Validation rejections are expected user input, reported as a 422
/// with the offending field; they are never logged as faults.
pub async fn create(
    State(state): State<ServerState>,
    Json(draft): Json<ReservationDraft>,
) -> AppResult<(StatusCode, Json<CreateResponse>)> {
    match state.booking.create(draft).await {
        Ok(reservation) => Ok((
            StatusCode::OK,
            Json(CreateResponse {
                success: true,
                id: Some(reservation.id),
                error: None,
            }),
        )),
        Err(CreateError::Rejected(rejection)) => {
            debug!(field = %rejection.field, reason = %rejection.reason, "Reservation rejected");
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(CreateResponse {
                    success: false,
                    id: None,
                    error: Some(rejection),
                }),
            ))
        }
        Err(CreateError::Repo(e)) => Err(AppError::from(e)),
    }
}

/// DELETE /api/reservations/:id - 取消预订
///
/// Unknown ids surface as a 404 failure envelope, not an exception.
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CancelResponse>> {
    state.booking.cancel(&id).await.map_err(AppError::from)?;
    Ok(Json(CancelResponse { success: true }))
}

/// DELETE /api/reservations/date/:date - 按日期批量删除 (YYYY-MM-DD)
///
/// The date is interpreted in the business timezone.
pub async fn sweep_by_date(
    State(state): State<ServerState>,
    Path(date): Path<String>,
) -> AppResult<Json<SweepResponse>> {
    let date = parse_date(&date)?;
    let deleted_count = state
        .booking
        .sweep_by_date(date)
        .await
        .map_err(AppError::from)?;
    Ok(Json(SweepResponse {
        success: true,
        deleted_count,
    }))
}

//! Reservations API 模块

mod handler;

use axum::{Router, routing::delete, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservations", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", delete(handler::cancel))
        .route("/date/{date}", delete(handler::sweep_by_date))
}

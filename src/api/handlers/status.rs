use crate::api::responses::{ApiResponse, StatusResponse};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

pub(crate) async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        estimates_served: state.estimates_served(),
        estimates_rejected: state.estimates_rejected(),
    }))
}

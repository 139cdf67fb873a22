use crate::api::responses::{ApiResponse, SettingsUpdateRequest};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

pub(crate) async fn get_settings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.config.clone()))
}

pub(crate) async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SettingsUpdateRequest>,
) -> impl IntoResponse {
    let mut config = state.config.clone();

    if let Some(v) = req.scheme {
        config.scheme = v;
    }
    if let Some(v) = req.domain_mode {
        config.domain_mode = v;
    }
    if let Some(v) = req.compression_enabled {
        config.compression_enabled = v;
    }
    if let Some(v) = req.lfs_overhead_pct {
        config.lfs_overhead_pct = v;
    }
    if let Some(v) = req.checksum_overhead_pct {
        config.checksum_overhead_pct = v;
    }
    if let Some(v) = req.event_capacity {
        config.event_capacity = v;
    }

    if let Err(e) = config.validate() {
        return Json(ApiResponse::<&str>::err(format!("Invalid settings: {e}")));
    }

    match config.save() {
        Ok(()) => Json(ApiResponse::ok("Settings saved (restart to apply)")),
        Err(e) => Json(ApiResponse::<&str>::err(format!("Failed to save settings: {e}"))),
    }
}

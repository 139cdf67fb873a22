use crate::api::responses::{
    ApiResponse, ScalingQuery, ScalingResponse, SchemesQuery, SchemesResponse,
};
use crate::sizing::{domain_scaling_factor, scheme_options};
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

pub(crate) async fn get_tables(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.tables.clone()))
}

/// Redundancy schemes placeable on `hosts` hosts, keeping `current` when possible.
pub(crate) async fn get_schemes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SchemesQuery>,
) -> impl IntoResponse {
    let options = scheme_options(&state.tables, query.hosts, query.current);

    Json(ApiResponse::ok(SchemesResponse {
        notices: options.unavailable.iter().map(ToString::to_string).collect(),
        available: options.available,
        selected: options.selected,
        show_notices: options.show_notices,
    }))
}

pub(crate) async fn get_scaling(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScalingQuery>,
) -> impl IntoResponse {
    let mode = query.mode.unwrap_or(state.config.domain_mode);

    Json(ApiResponse::ok(ScalingResponse {
        hosts: query.hosts,
        mode,
        factor: domain_scaling_factor(query.hosts, mode),
        cap: mode.curve().0,
    }))
}

use crate::api::responses::{
    ApiResponse, EstimateResponse, RenderedEstimate, SizingRequest, ValidationResponse,
};
use crate::events::Event;
use crate::sizing::{breakdown, estimate, validate, waterfall};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::{error, warn};

fn render<T: ToString>(items: &[T]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

pub(crate) async fn handle_validate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SizingRequest>,
) -> impl IntoResponse {
    let (cluster, workloads) = req.into_inputs(&state.config.cluster_defaults());
    let report = validate(&state.tables, &cluster, &workloads);

    Json(ApiResponse::ok(ValidationResponse {
        errors: report.error_messages(),
        warnings: report.warning_messages(),
    }))
}

/// Validate, then estimate only when validation found no blocking errors.
pub(crate) async fn handle_estimate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SizingRequest>,
) -> impl IntoResponse {
    let (cluster, workloads) = req.into_inputs(&state.config.cluster_defaults());
    let report = validate(&state.tables, &cluster, &workloads);
    let errors = report.error_messages();
    let input_warnings = report.warning_messages();

    if report.is_blocking() {
        warn!("Estimate rejected with {} configuration error(s)", errors.len());
        state.record_rejected();
        let _ = state.event_hub.publish(Event::EstimateRejected { errors: errors.clone() });
        return Json(ApiResponse::rejected(
            EstimateResponse { errors, input_warnings, estimate: None },
            "Configuration errors",
        ));
    }

    match estimate(&state.tables, &cluster, &workloads) {
        Ok(result) => {
            state.record_served();
            let _ = state.event_hub.publish(Event::EstimateReady {
                net_effective_tib: result.net_effective,
                capacity_utilization: result.capacity_utilization,
                overall_reduction: result.overall_reduction,
                warnings: result.warnings.len() as u32,
            });

            let rendered = RenderedEstimate {
                warnings: render(&result.warnings),
                compliance: render(&result.compliance),
                notes: render(&result.notes),
                breakdown: breakdown(&result, cluster.hosts),
                waterfall: waterfall(&result),
                result,
            };
            Json(ApiResponse::ok(EstimateResponse {
                errors,
                input_warnings,
                estimate: Some(rendered),
            }))
        }
        Err(e) => {
            error!("Calculation failed: {}", e);
            let _ = state.event_hub.publish(Event::EstimateFailed { message: e.to_string() });
            Json(ApiResponse::<EstimateResponse>::err(format!("Calculation failed: {e}")))
        }
    }
}

use crate::sizing::{
    BreakdownRow, ClusterConfig, DomainMode, EstimationResult, RedundancyScheme, WaterfallStage,
    WorkloadClass, WorkloadItem,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub(crate) struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub(crate) const fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub(crate) fn err(msg: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(msg.into()) }
    }

    /// Failure that still carries a payload explaining it.
    pub(crate) fn rejected(data: T, msg: impl Into<String>) -> Self {
        Self { success: false, data: Some(data), error: Some(msg.into()) }
    }
}

/// One workload as submitted; every field is optional and coerced.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct WorkloadRequest {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub class: Option<WorkloadClass>,
    pub logical_tib: Option<f64>,
    pub cold_pct: Option<f64>,
    pub compression_enabled: Option<bool>,
}

/// Request body for POST /api/validate and POST /api/estimate.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SizingRequest {
    pub hosts: Option<u32>,
    pub raw_tib_per_host: Option<f64>,
    pub scheme: Option<RedundancyScheme>,
    pub compression_enabled: Option<bool>,
    pub domain_mode: Option<DomainMode>,
    /// Percent, e.g. 13.1.
    pub lfs_overhead_pct: Option<f64>,
    /// Percent, e.g. 2.0.
    pub checksum_overhead_pct: Option<f64>,
    #[serde(default)]
    pub workloads: Vec<WorkloadRequest>,
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

impl SizingRequest {
    /// Coerce the request into estimator inputs.
    ///
    /// Missing host count and raw capacity become 0 so the validator reports
    /// them; everything else falls back to `defaults`.
    pub(crate) fn into_inputs(self, defaults: &ClusterConfig) -> (ClusterConfig, Vec<WorkloadItem>) {
        let cluster = ClusterConfig {
            hosts: self.hosts.unwrap_or(0),
            raw_tib_per_host: finite(self.raw_tib_per_host).unwrap_or(0.0),
            scheme: self.scheme.unwrap_or(defaults.scheme),
            compression_enabled: self.compression_enabled.unwrap_or(defaults.compression_enabled),
            domain_mode: self.domain_mode.unwrap_or(defaults.domain_mode),
            lfs_overhead_rate: finite(self.lfs_overhead_pct)
                .map_or(defaults.lfs_overhead_rate, |pct| pct / 100.0),
            checksum_rate: finite(self.checksum_overhead_pct)
                .map_or(defaults.checksum_rate, |pct| pct / 100.0),
        };

        let workloads = self
            .workloads
            .into_iter()
            .map(|w| WorkloadItem {
                id: w.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                class: w.class.unwrap_or(WorkloadClass::Unstructured),
                logical_tib: finite(w.logical_tib).unwrap_or(0.0),
                cold_pct: finite(w.cold_pct).unwrap_or(0.0),
                compression_enabled: w.compression_enabled.unwrap_or(true),
            })
            .collect();

        (cluster, workloads)
    }
}

/// Validator output rendered for display.
#[derive(Debug, Serialize)]
pub(crate) struct ValidationResponse {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// A computed estimate with its diagnostics rendered for display.
#[derive(Debug, Serialize)]
pub(crate) struct RenderedEstimate {
    pub result: EstimationResult,
    pub warnings: Vec<String>,
    pub compliance: Vec<String>,
    pub notes: Vec<String>,
    pub breakdown: Vec<BreakdownRow>,
    pub waterfall: Vec<WaterfallStage>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EstimateResponse {
    pub errors: Vec<String>,
    /// Advisory findings from validation.
    pub input_warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<RenderedEstimate>,
}

/// Query for GET /api/schemes.
#[derive(Debug, Deserialize)]
pub(crate) struct SchemesQuery {
    pub hosts: u32,
    pub current: Option<RedundancyScheme>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SchemesResponse {
    pub available: Vec<RedundancyScheme>,
    pub selected: Option<RedundancyScheme>,
    pub show_notices: bool,
    pub notices: Vec<String>,
}

/// Query for GET /api/scaling.
#[derive(Debug, Deserialize)]
pub(crate) struct ScalingQuery {
    pub hosts: u32,
    pub mode: Option<DomainMode>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScalingResponse {
    pub hosts: u32,
    pub mode: DomainMode,
    pub factor: f64,
    pub cap: f64,
}

/// Request body for POST /api/settings.
#[derive(Debug, Deserialize)]
pub(crate) struct SettingsUpdateRequest {
    pub scheme: Option<RedundancyScheme>,
    pub domain_mode: Option<DomainMode>,
    pub compression_enabled: Option<bool>,
    pub lfs_overhead_pct: Option<f64>,
    pub checksum_overhead_pct: Option<f64>,
    pub event_capacity: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct StatusResponse {
    pub version: String,
    pub estimates_served: u64,
    pub estimates_rejected: u64,
}

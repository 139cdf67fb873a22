use super::diagnostics::{CapacityWarning, ComplianceNote, Note};
use super::scaling::DomainMode;
use super::tables::{
    RedundancyScheme, WorkloadClass, DEFAULT_CHECKSUM_OVERHEAD_PCT, DEFAULT_LFS_OVERHEAD_PCT,
};
use serde::{Deserialize, Serialize};

/// One declared data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadItem {
    pub id: String,
    #[serde(rename = "type")]
    pub class: WorkloadClass,
    /// Logical size before any efficiency is applied.
    pub logical_tib: f64,
    /// Fraction of the compressed data that is cold and eligible for dedupe.
    pub cold_pct: f64,
    /// Per-item opt-out from compression; only honoured when compression is on globally.
    pub compression_enabled: bool,
}

impl WorkloadItem {
    pub fn new(
        id: impl Into<String>,
        class: WorkloadClass,
        logical_tib: f64,
        cold_pct: f64,
        compression_enabled: bool,
    ) -> Self {
        Self { id: id.into(), class, logical_tib, cold_pct, compression_enabled }
    }
}

/// Total logical size of a workload set; negative or NaN sizes count as zero.
pub(crate) fn logical_total(workloads: &[WorkloadItem]) -> f64 {
    workloads.iter().map(|w| w.logical_tib.max(0.0)).sum()
}

/// Cluster-level inputs of one estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    pub hosts: u32,
    pub raw_tib_per_host: f64,
    pub scheme: RedundancyScheme,
    pub compression_enabled: bool,
    pub domain_mode: DomainMode,
    /// Filesystem metadata overhead as a fraction (0.131 = 13.1%).
    pub lfs_overhead_rate: f64,
    /// Checksum overhead as a fraction.
    pub checksum_rate: f64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            hosts: 6,
            raw_tib_per_host: 20.0,
            scheme: RedundancyScheme::Raid5,
            compression_enabled: true,
            domain_mode: DomainMode::Typical,
            lfs_overhead_rate: DEFAULT_LFS_OVERHEAD_PCT / 100.0,
            checksum_rate: DEFAULT_CHECKSUM_OVERHEAD_PCT / 100.0,
        }
    }
}

/// A workload after the compression and dedupe phases.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadBreakdown {
    #[serde(flatten)]
    pub item: WorkloadItem,
    pub compression_factor: f64,
    pub compressed: f64,
    pub cold: f64,
    pub similarity: f64,
    pub dedupe_probability: f64,
    /// Always within `[0, cold]`.
    pub dedupe_savings: f64,
    /// Logical size over what the item finally occupies before overheads.
    pub effective_factor: f64,
}

/// Full output of the estimation pipeline. All capacities are in TiB.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationResult {
    pub logical_total: f64,
    pub total_compressed: f64,
    pub total_dedupe_savings: f64,
    pub after_dedupe: f64,
    pub replica_data: f64,
    pub object_and_replica: f64,
    pub lfs_overhead: f64,
    pub checksum_overhead: f64,
    pub net_effective: f64,

    pub raid_overhead: f64,
    pub scheme: RedundancyScheme,
    pub scheme_description: String,
    pub scheme_encoding: String,
    pub domain_scaling: f64,

    pub total_raw_capacity: f64,
    pub usable_raw_capacity: f64,
    /// Percent of usable raw capacity consumed by `net_effective`.
    pub capacity_utilization: f64,

    pub overall_reduction: f64,
    pub compression_only: f64,
    pub dedupe_only: f64,

    pub workloads: Vec<WorkloadBreakdown>,
    pub warnings: Vec<CapacityWarning>,
    pub compliance: Vec<ComplianceNote>,
    pub notes: Vec<Note>,
}

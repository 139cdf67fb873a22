use super::scaling::safe_div;
use super::types::EstimationResult;
use serde::Serialize;

/// How a breakdown row should be emphasised when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// Physical capacity of the cluster, not data.
    Capacity,
    Stage,
    /// Added on top of the previous stage.
    Overhead,
    Total,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub label: &'static str,
    pub value_tib: f64,
    pub detail: String,
    pub kind: RowKind,
}

/// One bar of the capacity waterfall, largest physical figures first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallStage {
    pub label: &'static str,
    pub value_tib: f64,
}

/// Capacity breakdown table, from raw capacity down to net effective consumption.
pub fn breakdown(result: &EstimationResult, hosts: u32) -> Vec<BreakdownRow> {
    let row = |label: &'static str, value_tib: f64, detail: String, kind: RowKind| BreakdownRow {
        label,
        value_tib,
        detail,
        kind,
    };
    let lfs_share_pct = 100.0 * safe_div(result.lfs_overhead, result.object_and_replica);

    vec![
        row(
            "Raw NVMe Capacity",
            result.total_raw_capacity,
            format!("All-flash NVMe across {hosts} ESA hosts"),
            RowKind::Capacity,
        ),
        row(
            "Usable Raw Capacity",
            result.usable_raw_capacity,
            format!("After {} overhead", result.scheme_encoding),
            RowKind::Capacity,
        ),
        row(
            "Logical Dataset",
            result.logical_total,
            "VM workload data before efficiency".to_string(),
            RowKind::Stage,
        ),
        row(
            "After ESA Compression",
            result.total_compressed,
            "512B compression within 4KB blocks".to_string(),
            RowKind::Stage,
        ),
        row(
            "After ESA Deduplication",
            result.after_dedupe,
            "4KB global post-processing deduplication".to_string(),
            RowKind::Stage,
        ),
        row(
            "ESA LFS Overhead",
            result.lfs_overhead,
            format!("Local File System metadata ({lfs_share_pct:.1}%)"),
            RowKind::Overhead,
        ),
        row(
            "Checksum Overhead",
            result.checksum_overhead,
            "End-to-end data integrity".to_string(),
            RowKind::Overhead,
        ),
        row(
            "Net Effective Capacity",
            result.net_effective,
            format!(
                "Final ESA storage consumption ({:.1}% utilization)",
                result.capacity_utilization
            ),
            RowKind::Total,
        ),
    ]
}

pub fn waterfall(result: &EstimationResult) -> Vec<WaterfallStage> {
    [
        ("Raw NVMe", result.total_raw_capacity),
        ("Usable Raw", result.usable_raw_capacity),
        ("Logical Data", result.logical_total),
        ("Compressed", result.total_compressed),
        ("After Dedupe", result.after_dedupe),
        ("Net Effective", result.net_effective),
    ]
    .into_iter()
    .map(|(label, value_tib)| WaterfallStage { label, value_tib })
    .collect()
}

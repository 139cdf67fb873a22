use super::diagnostics::{CapacityWarning, ComplianceNote, Note};
use super::error::EstimateError;
use super::scaling::{clamp, domain_scaling_factor, safe_div};
use super::tables::{RedundancyScheme, ReferenceTables};
use super::types::{
    logical_total as sum_logical, ClusterConfig, EstimationResult, WorkloadBreakdown, WorkloadItem,
};
use tracing::{debug, info};

/// Post-process dedupe finds fewer duplicates in compressed blocks.
const COMPRESSED_DEDUPE_EFFICIENCY: f64 = 0.6;
const UNCOMPRESSED_DEDUPE_EFFICIENCY: f64 = 0.75;

/// Space overheads stacked on top of the post-dedupe data.
struct Overheads {
    raid_overhead: f64,
    replica_data: f64,
    object_and_replica: f64,
    lfs_overhead: f64,
    checksum_overhead: f64,
}

/// Whether an item goes through the compression path.
const fn is_compressed(config: &ClusterConfig, item: &WorkloadItem) -> bool {
    config.compression_enabled && item.compression_enabled
}

/// Estimate the net effective capacity a workload set consumes on the cluster.
///
/// Runs the four phases in order: per-item compression (512B granularity),
/// cluster-wide post-process dedupe, filesystem overhead on object + replica
/// data, checksum overhead on post-dedupe data. The input should already have
/// passed [`validate`](super::validate); the only failure here is an empty
/// dataset.
pub fn estimate(
    tables: &ReferenceTables,
    config: &ClusterConfig,
    workloads: &[WorkloadItem],
) -> Result<EstimationResult, EstimateError> {
    let logical_total = sum_logical(workloads);
    if logical_total <= 0.0 {
        return Err(EstimateError::EmptyDataset);
    }

    let mut breakdown = compress_phase(tables, config, workloads);
    let total_compressed: f64 = breakdown.iter().map(|b| b.compressed).sum();
    debug!(
        "Compression phase: logical={:.2} TiB -> compressed={:.2} TiB",
        logical_total, total_compressed
    );

    let domain_scaling = domain_scaling_factor(config.hosts, config.domain_mode);
    let total_dedupe_savings = dedupe_phase(tables, config, domain_scaling, &mut breakdown);
    let after_dedupe = (total_compressed - total_dedupe_savings).max(0.0);
    debug!(
        "Dedupe phase: scaling={:.4}, savings={:.2} TiB, after_dedupe={:.2} TiB",
        domain_scaling, total_dedupe_savings, after_dedupe
    );

    let spec = tables.scheme(config.scheme);
    let overheads = overhead_phase(config, spec.overhead, after_dedupe);
    debug!(
        "Overhead phase: replica={:.2} TiB, lfs={:.2} TiB, checksum={:.2} TiB",
        overheads.replica_data, overheads.lfs_overhead, overheads.checksum_overhead
    );

    let net_effective = after_dedupe + overheads.lfs_overhead + overheads.checksum_overhead;

    let total_raw_capacity = f64::from(config.hosts) * config.raw_tib_per_host.max(0.0);
    let usable_raw_capacity = safe_div(total_raw_capacity, overheads.raid_overhead);
    let capacity_utilization = 100.0 * safe_div(net_effective, usable_raw_capacity);

    let overall_reduction = safe_div(logical_total, net_effective);
    let compression_only = safe_div(logical_total, total_compressed);
    let dedupe_only = safe_div(total_compressed, after_dedupe);

    let limits = &tables.limits;
    let mut warnings = Vec::new();
    if net_effective > usable_raw_capacity {
        warnings.push(CapacityWarning::CapacityViolation {
            net_effective_tib: net_effective,
            usable_raw_tib: usable_raw_capacity,
        });
    }
    if capacity_utilization > limits.utilization_warn_pct {
        warnings.push(CapacityWarning::HighUtilization {
            utilization_pct: capacity_utilization,
            threshold_pct: limits.utilization_warn_pct,
        });
    }
    if overall_reduction > limits.max_plausible_reduction {
        warnings.push(CapacityWarning::AggressiveEfficiency {
            overall_reduction,
            threshold: limits.max_plausible_reduction,
        });
    }

    let mut compliance = Vec::new();
    if config.raw_tib_per_host >= limits.min_raw_tib_per_host {
        compliance.push(ComplianceNote::StorageRequirementMet);
    }
    if (limits.min_hosts..=limits.max_hosts).contains(&config.hosts) {
        compliance.push(ComplianceNote::HostCountSupported);
    }
    if config.scheme == RedundancyScheme::Raid5 && config.hosts >= limits.min_hosts {
        compliance.push(ComplianceNote::AdaptiveErasureCodingSupported);
    }

    let notes = vec![
        Note::Architecture {
            encoding: spec.encoding.clone(),
            overhead_pct: (overheads.raid_overhead - 1.0) * 100.0,
        },
        Note::GlobalDedupeDomain,
        Note::PostProcessDedupe,
        Note::CompressionGranularity,
        Note::FilesystemOverhead { rate_pct: config.lfs_overhead_rate * 100.0 },
        Note::DomainScaling {
            factor: domain_scaling,
            hosts: config.hosts,
            mode: config.domain_mode,
        },
    ];

    info!(
        "Estimate: logical={:.1} TiB, net_effective={:.1} TiB, reduction={:.2}x, \
         utilization={:.1}%, {} warning(s)",
        logical_total,
        net_effective,
        overall_reduction,
        capacity_utilization,
        warnings.len()
    );

    Ok(EstimationResult {
        logical_total,
        total_compressed,
        total_dedupe_savings,
        after_dedupe,
        replica_data: overheads.replica_data,
        object_and_replica: overheads.object_and_replica,
        lfs_overhead: overheads.lfs_overhead,
        checksum_overhead: overheads.checksum_overhead,
        net_effective,
        raid_overhead: overheads.raid_overhead,
        scheme: config.scheme,
        scheme_description: spec.description.clone(),
        scheme_encoding: spec.encoding.clone(),
        domain_scaling,
        total_raw_capacity,
        usable_raw_capacity,
        capacity_utilization,
        overall_reduction,
        compression_only,
        dedupe_only,
        workloads: breakdown,
        warnings,
        compliance,
        notes,
    })
}

/// Phase 1: compress every item independently and split off its cold share.
fn compress_phase(
    tables: &ReferenceTables,
    config: &ClusterConfig,
    workloads: &[WorkloadItem],
) -> Vec<WorkloadBreakdown> {
    workloads
        .iter()
        .map(|w| {
            let profile = tables.profile(w.class);
            // A factor below 1.0 would inflate data; compression only ever shrinks.
            let compression_factor = if is_compressed(config, w) {
                profile.compression_default.max(1.0)
            } else {
                1.0
            };
            let compressed = w.logical_tib.max(0.0) / compression_factor;
            let cold = compressed * clamp(w.cold_pct, 0.0, 1.0);

            WorkloadBreakdown {
                item: w.clone(),
                compression_factor,
                compressed,
                cold,
                similarity: profile.similarity,
                dedupe_probability: 0.0,
                dedupe_savings: 0.0,
                effective_factor: 0.0,
            }
        })
        .collect()
}

/// Phase 2: cluster-wide dedupe over cold data. Returns the total savings.
fn dedupe_phase(
    tables: &ReferenceTables,
    config: &ClusterConfig,
    domain_scaling: f64,
    breakdown: &mut [WorkloadBreakdown],
) -> f64 {
    let mut total_savings = 0.0;

    for b in breakdown.iter_mut() {
        let similarity = tables.profile(b.item.class).similarity;
        let efficiency = if is_compressed(config, &b.item) {
            COMPRESSED_DEDUPE_EFFICIENCY
        } else {
            UNCOMPRESSED_DEDUPE_EFFICIENCY
        };

        b.dedupe_probability = clamp(similarity * domain_scaling, 0.0, 1.0);
        b.dedupe_savings = clamp(b.cold * b.dedupe_probability * efficiency, 0.0, b.cold);
        b.effective_factor =
            safe_div(b.item.logical_tib.max(0.0), b.compressed - b.dedupe_savings);

        total_savings += b.dedupe_savings;
    }

    total_savings
}

/// Phases 3 and 4: replica data re-expressed from the scheme overhead, LFS
/// metadata on object + replica, checksums on post-dedupe data only.
fn overhead_phase(config: &ClusterConfig, raid_overhead: f64, after_dedupe: f64) -> Overheads {
    let replica_data = (after_dedupe * (raid_overhead - 1.0)).max(0.0);
    let object_and_replica = after_dedupe + replica_data;
    let lfs_overhead = object_and_replica * config.lfs_overhead_rate.max(0.0);
    let checksum_overhead = after_dedupe * config.checksum_rate.max(0.0);

    Overheads { raid_overhead, replica_data, object_and_replica, lfs_overhead, checksum_overhead }
}

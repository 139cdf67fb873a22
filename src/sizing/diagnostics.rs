//! Structured diagnostics produced by the validator and the estimator.
//!
//! Every diagnostic is a tagged variant carrying its parameters; the
//! human-readable text exists only in the `Display` impls, which the API
//! layer calls when it renders a response.

use super::scaling::DomainMode;
use serde::Serialize;
use std::fmt;

/// Blocking input problem. While any exist, the estimator must not run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    BelowQuorum { hosts: u32, min_hosts: u32 },
    TooManyHosts { hosts: u32, max_hosts: u32 },
    SchemeNeedsMoreHosts { description: String, hosts: u32, min_hosts: u32 },
    RawCapacityTooSmall { per_host_tib: f64, min_tib: f64 },
    EmptyDataset,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowQuorum { min_hosts, .. } => {
                write!(f, "vSAN ESA requires minimum {min_hosts} hosts for quorum.")
            }
            Self::TooManyHosts { max_hosts, .. } => {
                write!(f, "vSAN ESA supports maximum {max_hosts} hosts per cluster.")
            }
            Self::SchemeNeedsMoreHosts { description, min_hosts, .. } => {
                write!(f, "{description} requires minimum {min_hosts} hosts.")
            }
            Self::RawCapacityTooSmall { min_tib, .. } => {
                write!(f, "ESA requires minimum {min_tib} TiB NVMe per host.")
            }
            Self::EmptyDataset => f.write_str("Total logical dataset must be > 0."),
        }
    }
}

/// Advisory input finding; never blocks estimation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationWarning {
    RawCapacityAboveTested { per_host_tib: f64, max_tib: f64 },
    VmDensity { estimated_vms: f64, hosts: u32, max_vms_per_host: u32 },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RawCapacityAboveTested { per_host_tib, max_tib } => write!(
                f,
                "{per_host_tib} TiB per host exceeds typical ESA configurations \
                 ({max_tib} TiB max tested)."
            ),
            Self::VmDensity { estimated_vms, max_vms_per_host, .. } => write!(
                f,
                "Estimated {} VMs may exceed ESA limit of {max_vms_per_host} VMs per host.",
                estimated_vms.round()
            ),
        }
    }
}

/// A redundancy scheme that cannot be placed on the current host count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeUnavailable {
    pub description: String,
    pub encoding: String,
    pub min_hosts: u32,
}

impl fmt::Display for SchemeUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} requires minimum {} hosts (ESA {})",
            self.description, self.min_hosts, self.encoding
        )
    }
}

/// Capacity finding raised on a computed estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CapacityWarning {
    /// Net effective consumption does not fit in usable raw capacity.
    CapacityViolation { net_effective_tib: f64, usable_raw_tib: f64 },
    HighUtilization { utilization_pct: f64, threshold_pct: f64 },
    /// Overall reduction is high enough to need manual review.
    AggressiveEfficiency { overall_reduction: f64, threshold: f64 },
}

impl fmt::Display for CapacityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityViolation { net_effective_tib, usable_raw_tib } => write!(
                f,
                "CAPACITY VIOLATION: Net effective ({net_effective_tib:.1} TiB) exceeds \
                 usable raw ({usable_raw_tib:.1} TiB)"
            ),
            Self::HighUtilization { utilization_pct, threshold_pct } => write!(
                f,
                "HIGH UTILIZATION: {utilization_pct:.1}% of usable capacity \
                 (ESA recommends <{threshold_pct}%)"
            ),
            Self::AggressiveEfficiency { overall_reduction, .. } => write!(
                f,
                "AGGRESSIVE EFFICIENCY: {overall_reduction:.1}x reduction may require validation"
            ),
        }
    }
}

/// Positive compliance confirmation attached to an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceNote {
    StorageRequirementMet,
    HostCountSupported,
    AdaptiveErasureCodingSupported,
}

impl fmt::Display for ComplianceNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StorageRequirementMet => "ESA NVMe storage requirement met",
            Self::HostCountSupported => "ESA host count within supported range",
            Self::AdaptiveErasureCodingSupported => {
                "ESA adaptive RAID-5 configuration supported"
            }
        })
    }
}

/// Explanatory note describing how the estimate was modelled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Note {
    Architecture { encoding: String, overhead_pct: f64 },
    GlobalDedupeDomain,
    PostProcessDedupe,
    CompressionGranularity,
    FilesystemOverhead { rate_pct: f64 },
    DomainScaling { factor: f64, hosts: u32, mode: DomainMode },
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Architecture { encoding, overhead_pct } => {
                write!(f, "ESA Architecture: {encoding} with {overhead_pct:.0}% overhead")
            }
            Self::GlobalDedupeDomain => f.write_str(
                "Global deduplication domain spans entire cluster (no disk groups in ESA)",
            ),
            Self::PostProcessDedupe => f.write_str(
                "4KB block deduplication with post-processing (no write-path impact)",
            ),
            Self::CompressionGranularity => f.write_str(
                "512B compression granularity within 4KB blocks (per storage policy)",
            ),
            Self::FilesystemOverhead { rate_pct } => {
                write!(f, "LFS overhead: {rate_pct:.1}% of object + replica data")
            }
            Self::DomainScaling { factor, hosts, mode } => {
                write!(f, "Domain scaling: {factor:.3} effectiveness ({hosts} hosts, {mode})")
            }
        }
    }
}

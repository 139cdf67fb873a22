use super::diagnostics::{SchemeUnavailable, ValidationError, ValidationWarning};
use super::tables::{RedundancyScheme, ReferenceTables};
use super::types::{logical_total, ClusterConfig, WorkloadItem};
use serde::Serialize;
use tracing::debug;

/// Below this host count, unavailable schemes are worth telling the user about.
const SCHEME_NOTICE_HOST_THRESHOLD: u32 = 6;

/// Outcome of validating one input snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// True when the estimator must not be invoked.
    pub fn is_blocking(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Check a cluster configuration and workload list against the platform limits.
///
/// Pure: reads its inputs, returns every finding, mutates nothing.
pub fn validate(
    tables: &ReferenceTables,
    config: &ClusterConfig,
    workloads: &[WorkloadItem],
) -> ValidationReport {
    let limits = &tables.limits;
    let hosts = config.hosts;
    let mut report = ValidationReport::default();

    if hosts < limits.min_hosts {
        report.errors.push(ValidationError::BelowQuorum { hosts, min_hosts: limits.min_hosts });
    }
    if hosts > limits.max_hosts {
        report.errors.push(ValidationError::TooManyHosts { hosts, max_hosts: limits.max_hosts });
    }

    // Unknown schemes carry no host floor of their own.
    if let Some(spec) = tables.find_scheme(config.scheme) {
        if hosts < spec.min_hosts {
            report.errors.push(ValidationError::SchemeNeedsMoreHosts {
                description: spec.description.clone(),
                hosts,
                min_hosts: spec.min_hosts,
            });
        }
    }

    let per_host = config.raw_tib_per_host;
    if per_host < limits.min_raw_tib_per_host {
        report.errors.push(ValidationError::RawCapacityTooSmall {
            per_host_tib: per_host,
            min_tib: limits.min_raw_tib_per_host,
        });
    }
    if per_host > limits.max_raw_tib_per_host {
        report.warnings.push(ValidationWarning::RawCapacityAboveTested {
            per_host_tib: per_host,
            max_tib: limits.max_raw_tib_per_host,
        });
    }

    let total_logical = logical_total(workloads);
    if total_logical <= 0.0 {
        report.errors.push(ValidationError::EmptyDataset);
    }

    let estimated_vms = total_logical / limits.avg_vm_size_tib;
    if estimated_vms > f64::from(hosts) * f64::from(limits.max_vms_per_host) {
        report.warnings.push(ValidationWarning::VmDensity {
            estimated_vms,
            hosts,
            max_vms_per_host: limits.max_vms_per_host,
        });
    }

    debug!(
        "Validated {} hosts / {} workloads: {} error(s), {} warning(s)",
        hosts,
        workloads.len(),
        report.errors.len(),
        report.warnings.len()
    );

    report
}

/// Which redundancy schemes a given host count can carry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeOptions {
    /// Placeable schemes, in table order.
    pub available: Vec<RedundancyScheme>,
    pub unavailable: Vec<SchemeUnavailable>,
    /// Scheme to use: the current one if still placeable, else RAID-5, else the first available.
    pub selected: Option<RedundancyScheme>,
    /// Whether the unavailability notices should be shown to the user.
    pub show_notices: bool,
}

pub fn scheme_options(
    tables: &ReferenceTables,
    hosts: u32,
    current: Option<RedundancyScheme>,
) -> SchemeOptions {
    let mut available = Vec::new();
    let mut unavailable = Vec::new();

    for (&scheme, spec) in &tables.schemes {
        if hosts >= spec.min_hosts {
            available.push(scheme);
        } else {
            unavailable.push(SchemeUnavailable {
                description: spec.description.clone(),
                encoding: spec.encoding.clone(),
                min_hosts: spec.min_hosts,
            });
        }
    }

    let selected = current
        .filter(|c| available.contains(c))
        .or_else(|| available.iter().copied().find(|&s| s == RedundancyScheme::Raid5))
        .or_else(|| available.first().copied());

    let show_notices = !unavailable.is_empty() && hosts < SCHEME_NOTICE_HOST_THRESHOLD;

    SchemeOptions { available, unavailable, selected, show_notices }
}

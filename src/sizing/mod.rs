//! Capacity estimation core: reference tables, scaling curves, input
//! validation and the four-phase estimation pipeline. Synchronous and free
//! of I/O; every call is independent of every other.

mod diagnostics;
mod error;
mod estimator;
mod report;
mod scaling;
mod tables;
mod types;
mod validator;

pub use diagnostics::{
    CapacityWarning, ComplianceNote, Note, SchemeUnavailable, ValidationError, ValidationWarning,
};
pub use error::EstimateError;
pub use estimator::estimate;
pub use report::{breakdown, waterfall, BreakdownRow, RowKind, WaterfallStage};
pub use scaling::{clamp, domain_scaling_factor, safe_div, DomainMode};
pub use tables::{
    PlatformLimits, RedundancyScheme, ReferenceTables, SchemeSpec, WorkloadClass,
    WorkloadProfile, DEFAULT_CHECKSUM_OVERHEAD_PCT, DEFAULT_LFS_OVERHEAD_PCT,
};
pub use types::{ClusterConfig, EstimationResult, WorkloadBreakdown, WorkloadItem};
pub use validator::{scheme_options, validate, SchemeOptions, ValidationReport};

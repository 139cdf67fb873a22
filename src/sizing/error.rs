use thiserror::Error;

/// Failures of the estimation pipeline itself.
///
/// Input problems the caller can fix are reported by the validator instead;
/// this type only covers the cases where no estimate can be produced at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// Total logical data is zero, so every ratio would divide by nothing.
    #[error("No workload data available")]
    EmptyDataset,
}

use thiserror::Error;

/// Errors surfaced by the solve pipeline.
///
/// The computation is deterministic and pure, so none of these are
/// retryable: a failed invocation produces no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("out of range: {0}")]
    IndexOutOfRange(String),

    #[error("rank solve failed: {0}")]
    SolveFailure(String),
}

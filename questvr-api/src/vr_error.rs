use thiserror::Error;

/// Failures of the tracking pipeline. None of them is fatal to the host:
/// each one degrades to fallback values or to the previous frame's cameras.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VRError {
    /// The tracking runtime is missing or failed to start. Fallback values
    /// are used for the rest of the session.
    #[error("tracking backend unavailable: {0}")]
    BackendUnavailable(String),

    /// A sampled pose failed the finiteness check. The previous frame's
    /// transforms are retained.
    #[error("invalid pose sample: {0}")]
    InvalidPose(String),

    /// A frame scoped call happened outside an active frame.
    #[error("no active frame (session is {0})")]
    InvalidFrameState(&'static str),

    /// A caller broke a documented contract, such as `near >= far`.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

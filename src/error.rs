//! Error types for rope construction, stepping and the analytical solvers.

/// Errors that can occur while building, stepping or solving a rope.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RopeError {
    /// A root finder ran out of seeds or iterations before meeting its tolerance.
    #[error("{what} did not converge after {attempts} attempts")]
    Convergence { what: &'static str, attempts: usize },
    /// The two ends of a spring coincide, so its force direction is undefined.
    #[error("spring {spring} has zero length")]
    DegenerateGeometry { spring: usize },
    /// An input was rejected before any work was done.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

//! Step observer trait for monitoring integrator progress.

use crate::error::RopeError;

/// Trait for observing RK4 steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging or
/// profiling). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after every node has been evaluated for RK4 stage `stage` (0..=3).
    fn on_stage(&mut self, _stage: usize) {}

    /// Called when a step is committed.
    fn on_step_complete(&mut self) {}

    /// Called when a step fails and the rope is rolled back.
    fn on_step_aborted(&mut self, _error: &RopeError) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

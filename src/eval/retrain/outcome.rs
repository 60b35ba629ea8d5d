//! Per-step outcomes folded into a decision.

/// Result of one decision step.
///
/// `Warning` and `Error` carry a message that lands on the decision's
/// `warnings` or `error` field; neither aborts the remaining steps.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome<T> {
    /// The step did not apply to this input
    Skipped,
    Success(T),
    /// Recoverable: the step's signal is unavailable
    Warning(String),
    /// Unexpected: the step failed on this input
    Error(String),
}

//! Per-call metrics for field evolution.
//!
//! [`EvolveMetrics`] captures timing and change data for a single
//! [`Field::evolve_with`](crate::Field::evolve_with) call.

/// Timing and change metrics collected during one evolution call.
///
/// The field populates these after each call; read them back with
/// [`Field::last_metrics`](crate::Field::last_metrics).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EvolveMetrics {
    /// Name of the kernel used.
    pub kernel: String,
    /// Number of sub-steps applied.
    pub steps: usize,
    /// Wall-clock time for the whole call, in microseconds.
    pub total_us: u64,
    /// Largest `|new - old|` over all cells in the final sub-step.
    /// Zero when no sub-steps ran.
    pub max_abs_change: f64,
}

impl EvolveMetrics {
    /// Mean wall-clock time per sub-step, in microseconds.
    pub fn mean_step_us(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.total_us as f64 / self.steps as f64
        }
    }
}

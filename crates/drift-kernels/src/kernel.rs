//! The [`Kernel`] trait.
//!
//! A kernel reconstructs a value at an off-grid location from a fixed stencil
//! of periodic samples around the enclosing cell.

use drift_grid::Departure;
use smallvec::SmallVec;

/// Interpolation weights, one per stencil offset.
pub type Weights = SmallVec<[f64; 4]>;

/// A periodic interpolation kernel.
///
/// # Contract
///
/// - `stencil()` and `weights()` have the same length.
/// - Weights sum to one for every `alpha` (constants are reproduced).
/// - `weights(0.0)` selects the sample at offset `0`.
///
/// # Object safety
///
/// This trait is object-safe; the integrator accepts `&dyn Kernel`.
///
/// # Examples
///
/// A nearest-neighbour kernel:
///
/// ```
/// use drift_grid::Departure;
/// use drift_kernels::{Kernel, Weights};
/// use smallvec::smallvec;
///
/// struct Nearest;
///
/// impl Kernel for Nearest {
///     fn name(&self) -> &str { "nearest" }
///     fn stencil(&self) -> &[i64] { &[0, 1] }
///     fn weights(&self, alpha: f64) -> Weights {
///         if alpha < 0.5 { smallvec![1.0, 0.0] } else { smallvec![0.0, 1.0] }
///     }
/// }
///
/// let values = [10.0, 20.0, 30.0];
/// let at = Departure { cell: 2, alpha: 0.75 };
/// assert_eq!(Nearest.sample(&values, at), 10.0);
/// ```
pub trait Kernel: Send + Sync {
    /// Human-readable name for logging and metrics.
    fn name(&self) -> &str;

    /// Logical offsets, relative to the departure cell, of the samples read.
    fn stencil(&self) -> &[i64];

    /// Weights for each stencil offset at fractional position `alpha`.
    fn weights(&self, alpha: f64) -> Weights;

    /// Interpolate `values` at `at`, wrapping stencil indices periodically.
    ///
    /// `values` must be non-empty.
    fn sample(&self, values: &[f64], at: Departure) -> f64 {
        let len = values.len();
        self.stencil()
            .iter()
            .zip(self.weights(at.alpha))
            .map(|(&offset, w)| w * values[at.neighbour(offset, len)])
            .sum()
    }
}

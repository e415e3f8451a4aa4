//! Periodic equidistant 1D grid.

use crate::departure::{wrap_index, Departure};
use crate::error::GridError;
use crate::tolerance::Tolerance;

/// A one-dimensional equidistant grid with periodic boundary.
///
/// Position `i` sits at `origin + i * step`. Index `len` is identified with
/// index `0`, so the grid is a ring of circumference
/// [`period()`](Self::period). A descending grid (negative step) is accepted;
/// [`spacing()`](Self::spacing) always reports the magnitude.
///
/// # Examples
///
/// ```
/// use drift_grid::{PeriodicGrid, Tolerance};
///
/// let grid = PeriodicGrid::new(vec![0.0, 1.0, 2.0, 3.0], Tolerance::Exact).unwrap();
/// assert_eq!(grid.len(), 4);
/// assert_eq!(grid.spacing(), 1.0);
/// assert_eq!(grid.period(), 4.0);
///
/// // One cell left of the origin is the last sample.
/// let d = grid.locate(-1.0);
/// assert_eq!((d.cell, d.alpha), (3, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicGrid {
    positions: Vec<f64>,
    origin: f64,
    step: f64,
}

impl PeriodicGrid {
    /// Minimum number of positions: two are needed to derive a spacing.
    pub const MIN_LEN: usize = 2;

    /// Validate `positions` and build a grid.
    ///
    /// The spacing is taken from the first two positions; every later
    /// position is checked against it under `tolerance`. Once the grid is
    /// accepted, the stored step is the end-to-end mean
    /// `(x[N-1] - x[0]) / (N - 1)`, which carries far less rounding than
    /// `x[1] - x[0]` when the origin is large compared with the spacing.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidTolerance`] if `tolerance` is unusable.
    /// - [`GridError::TooFewPoints`] if fewer than two positions are given.
    /// - [`GridError::DegenerateSpacing`] if the first two positions coincide
    ///   or the spacing is not finite.
    /// - [`GridError::NonEquidistant`] for the first position that deviates.
    pub fn new(positions: Vec<f64>, tolerance: Tolerance) -> Result<Self, GridError> {
        tolerance.validate()?;
        if positions.len() < Self::MIN_LEN {
            return Err(GridError::TooFewPoints {
                len: positions.len(),
            });
        }
        let origin = positions[0];
        let step = positions[1] - origin;
        if step == 0.0 || !step.is_finite() {
            return Err(GridError::DegenerateSpacing { spacing: step });
        }
        let scale = origin.abs().max(positions[1].abs());
        for (index, &found) in positions.iter().enumerate().skip(2) {
            let expected = origin + index as f64 * step;
            if !tolerance.accepts(expected, found, step, index, scale) {
                return Err(GridError::NonEquidistant {
                    index,
                    expected,
                    found,
                });
            }
        }

        let last = positions.len() - 1;
        let mean_step = (positions[last] - origin) / last as f64;
        // A very loose tolerance can accept a grid that folds back on itself.
        if mean_step == 0.0 || !mean_step.is_finite() || mean_step.signum() != step.signum() {
            return Err(GridError::DegenerateSpacing { spacing: mean_step });
        }
        Ok(Self {
            positions,
            origin,
            step: mean_step,
        })
    }

    /// Build a grid of `len` positions `origin + i * step`.
    ///
    /// The equidistance check is skipped: `step` is stored as given rather
    /// than re-derived from the rounded positions.
    pub fn uniform(origin: f64, step: f64, len: usize) -> Result<Self, GridError> {
        if len < Self::MIN_LEN {
            return Err(GridError::TooFewPoints { len });
        }
        if step == 0.0 || !step.is_finite() || !origin.is_finite() {
            return Err(GridError::DegenerateSpacing { spacing: step });
        }
        let positions = (0..len).map(|i| origin + i as f64 * step).collect();
        Ok(Self {
            positions,
            origin,
            step,
        })
    }

    /// Number of grid positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always returns `false`: construction rejects fewer than two positions.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The validated positions, in the order supplied.
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Position of index `0`.
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Distance between neighbouring positions (always positive).
    pub fn spacing(&self) -> f64 {
        self.step.abs()
    }

    /// Signed step from index `i` to index `i + 1`.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Whether positions decrease with index.
    pub fn is_descending(&self) -> bool {
        self.step < 0.0
    }

    /// Length of one revolution of the ring: `len * spacing`.
    pub fn period(&self) -> f64 {
        self.len() as f64 * self.spacing()
    }

    /// Wrap a logical index onto this grid.
    pub fn wrap(&self, idx: i64) -> usize {
        wrap_index(idx, self.len())
    }

    /// Locate an arbitrary coordinate on the ring.
    pub fn locate(&self, x: f64) -> Departure {
        let s = (x - self.origin) / self.step;
        Departure::from_fractional_index(s, self.len())
    }

    /// Departure point of grid index `i` after moving by `displacement`.
    ///
    /// A parcel arriving at `positions[i]` started from
    /// `positions[i] - displacement`.
    pub fn departure(&self, i: usize, displacement: f64) -> Departure {
        self.locate(self.positions[i] - displacement)
    }

    /// Check that a sample array matches this grid's length.
    pub fn check_samples(&self, values: &[f64]) -> Result<(), GridError> {
        if values.len() != self.len() {
            return Err(GridError::InvalidGrid {
                positions: self.len(),
                values: values.len(),
            });
        }
        Ok(())
    }
}

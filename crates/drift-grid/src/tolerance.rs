//! Equidistance comparison modes.

use crate::error::GridError;

/// How strictly [`PeriodicGrid::new`](crate::PeriodicGrid::new) checks that
/// positions are evenly spaced.
///
/// Each position `x[i]` is compared against `x[0] + i * dx`, where
/// `dx = x[1] - x[0]`.
///
/// - **Exact**: bitwise floating-point equality. Rejects most grids built by
///   repeated addition or `linspace`-style division.
/// - **Relative**: `|x[i] - (x[0] + i*dx)| <= eps * |dx| * i`, widened by the
///   rounding carried by the coordinates themselves. The allowed drift grows
///   with `i` because the expected position accumulates one rounding of `dx`
///   per cell. When the origin is large compared with `dx`, every stored
///   position and `dx` itself are only known to about one ulp of the
///   coordinate magnitude, so that floor is added on top of the `eps` term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tolerance {
    /// Exact floating-point equality.
    Exact,
    /// Deviation bounded by `epsilon * |dx| * index`.
    Relative(f64),
}

impl Tolerance {
    /// Default relative epsilon.
    pub const DEFAULT_EPSILON: f64 = 1e-9;

    /// Check that the tolerance itself is usable.
    pub fn validate(&self) -> Result<(), GridError> {
        match *self {
            Self::Exact => Ok(()),
            Self::Relative(epsilon) => {
                if epsilon.is_finite() && epsilon >= 0.0 {
                    Ok(())
                } else {
                    Err(GridError::InvalidTolerance { epsilon })
                }
            }
        }
    }

    /// Whether `found` is acceptably close to `expected` at grid `index`.
    ///
    /// `scale` is the magnitude of the coordinates `dx` was derived from,
    /// `max(|x[0]|, |x[1]|)`. NaN positions never match.
    pub fn accepts(
        &self,
        expected: f64,
        found: f64,
        spacing: f64,
        index: usize,
        scale: f64,
    ) -> bool {
        match *self {
            Self::Exact => found == expected,
            Self::Relative(epsilon) => {
                let spacing = spacing.abs();
                let cells = index as f64;
                let magnitude = scale.max(expected.abs()).max(found.abs());
                // Each cell of `dx` carries the rounding of x[0] and x[1];
                // the expected and found positions add a few more ulps.
                let rounding = 2.0 * f64::EPSILON * (cells + 1.0) * (magnitude + spacing);
                (found - expected).abs() <= epsilon * spacing * cells + rounding
            }
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::Relative(Self::DEFAULT_EPSILON)
    }
}

//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction or sample validation.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Position and value arrays differ in length.
    InvalidGrid {
        /// Number of positions.
        positions: usize,
        /// Number of values.
        values: usize,
    },
    /// Fewer than two positions were supplied, so no spacing can be derived.
    TooFewPoints {
        /// Number of positions supplied.
        len: usize,
    },
    /// A position deviates from the uniform spacing implied by the first two.
    NonEquidistant {
        /// Index of the first offending position.
        index: usize,
        /// Position implied by `origin + index * spacing`.
        expected: f64,
        /// Position actually supplied.
        found: f64,
    },
    /// The spacing between the first two positions is zero or not finite.
    DegenerateSpacing {
        /// The offending spacing.
        spacing: f64,
    },
    /// A relative tolerance is negative or not finite.
    InvalidTolerance {
        /// The offending epsilon.
        epsilon: f64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { positions, values } => {
                write!(
                    f,
                    "invalid grid: {positions} positions but {values} values"
                )
            }
            Self::TooFewPoints { len } => {
                write!(f, "grid needs at least 2 positions, got {len}")
            }
            Self::NonEquidistant {
                index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "grid not equidistant: position {index} is {found}, expected {expected}"
                )
            }
            Self::DegenerateSpacing { spacing } => {
                write!(f, "grid spacing must be finite and non-zero, got {spacing}")
            }
            Self::InvalidTolerance { epsilon } => {
                write!(f, "tolerance must be finite and >= 0, got {epsilon}")
            }
        }
    }
}

impl std::error::Error for GridError {}

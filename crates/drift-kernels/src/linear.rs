//! Two-point linear interpolation.

use crate::kernel::{Kernel, Weights};
use smallvec::smallvec;

/// Linear interpolation between the departure cell and its right neighbour.
///
/// ```text
/// value = (1 - alpha) * v[j] + alpha * v[j + 1]
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Linear;

impl Linear {
    const STENCIL: [i64; 2] = [0, 1];
}

impl Kernel for Linear {
    fn name(&self) -> &str {
        "linear"
    }

    fn stencil(&self) -> &[i64] {
        &Self::STENCIL
    }

    fn weights(&self, alpha: f64) -> Weights {
        smallvec![1.0 - alpha, alpha]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_grid::Departure;

    #[test]
    fn midpoint_averages() {
        let v = [2.0, 4.0, 8.0];
        let at = Departure {
            cell: 1,
            alpha: 0.5,
        };
        assert_eq!(Linear.sample(&v, at), 6.0);
    }

    #[test]
    fn last_cell_reads_first_sample() {
        let v = [2.0, 4.0, 8.0];
        let at = Departure {
            cell: 2,
            alpha: 0.25,
        };
        assert_eq!(Linear.sample(&v, at), 0.75 * 8.0 + 0.25 * 2.0);
    }

    #[test]
    fn alpha_zero_is_exact() {
        let v = [0.1, 0.7, -3.3];
        for cell in 0..3 {
            let at = Departure { cell, alpha: 0.0 };
            assert_eq!(Linear.sample(&v, at), v[cell]);
        }
    }
}

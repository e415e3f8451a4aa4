//! Four-point cubic Lagrange interpolation.

use crate::kernel::{Kernel, Weights};
use smallvec::smallvec;

/// Cubic Lagrange interpolation through samples at offsets `-1, 0, 1, 2`.
///
/// ```text
/// value = -a(1-a)(2-a)/6   * v[j-1]
///       + (1-a²)(2-a)/2    * v[j]
///       + a(1+a)(2-a)/2    * v[j+1]
///       - a(1-a²)/6        * v[j+2]
/// ```
///
/// Reproduces polynomials up to degree three exactly (up to rounding).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CubicLagrange;

impl CubicLagrange {
    const STENCIL: [i64; 4] = [-1, 0, 1, 2];
}

impl Kernel for CubicLagrange {
    fn name(&self) -> &str {
        "cubic"
    }

    fn stencil(&self) -> &[i64] {
        &Self::STENCIL
    }

    fn weights(&self, alpha: f64) -> Weights {
        let a = alpha;
        let a2 = a * a;
        smallvec![
            -a * (1.0 - a) * (2.0 - a) / 6.0,
            (1.0 - a2) * (2.0 - a) / 2.0,
            a * (1.0 + a) * (2.0 - a) / 2.0,
            -a * (1.0 - a2) / 6.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_grid::Departure;

    #[test]
    fn weights_at_half() {
        let w = CubicLagrange.weights(0.5);
        assert_eq!(w.as_slice(), &[-0.0625, 0.5625, 0.5625, -0.0625]);
    }

    #[test]
    fn weights_at_zero_select_centre() {
        let w = CubicLagrange.weights(0.0);
        assert_eq!(w.as_slice(), &[0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn reproduces_cubic_polynomial() {
        // p(x) = x^3 - 2x^2 + 0.5x + 3 sampled at offsets -1..=2.
        let p = |x: f64| x * x * x - 2.0 * x * x + 0.5 * x + 3.0;
        let stencil = CubicLagrange.stencil();
        for alpha in [0.0, 0.1, 0.25, 0.5, 0.9] {
            let w = CubicLagrange.weights(alpha);
            let got: f64 = stencil
                .iter()
                .zip(w.iter())
                .map(|(&o, &wk)| wk * p(o as f64))
                .sum();
            assert!((got - p(alpha)).abs() < 1e-12, "alpha={alpha}");
        }
    }

    #[test]
    fn wraps_both_sides_of_stencil() {
        // Cell 0 reads index N-1 on the left; cell N-2 reads index 0 on the right.
        let v = [1.0, 2.0, 3.0, 4.0];
        let left = Departure {
            cell: 0,
            alpha: 0.5,
        };
        let expected = -0.0625 * 4.0 + 0.5625 * 1.0 + 0.5625 * 2.0 - 0.0625 * 3.0;
        assert_eq!(CubicLagrange.sample(&v, left), expected);

        let right = Departure {
            cell: 2,
            alpha: 0.5,
        };
        let expected = -0.0625 * 2.0 + 0.5625 * 3.0 + 0.5625 * 4.0 - 0.0625 * 1.0;
        assert_eq!(CubicLagrange.sample(&v, right), expected);
    }
}

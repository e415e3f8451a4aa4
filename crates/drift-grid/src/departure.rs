//! Periodic index wrapping and departure-point location.

/// Map a logical grid index onto `[0, len)` with periodic wraparound.
///
/// Unlike `%`, the result is never negative: `wrap_index(-1, 4) == 3`.
/// For every integer `k`, `wrap_index(idx + k * len, len) == wrap_index(idx, len)`.
///
/// # Panics
///
/// Panics if `len == 0`. [`PeriodicGrid`](crate::PeriodicGrid) guarantees
/// `len >= 2`.
///
/// # Examples
///
/// ```
/// use drift_grid::wrap_index;
///
/// assert_eq!(wrap_index(5, 4), 1);
/// assert_eq!(wrap_index(-1, 4), 3);
/// assert_eq!(wrap_index(-9, 4), 3);
/// ```
#[inline]
pub fn wrap_index(idx: i64, len: usize) -> usize {
    idx.rem_euclid(len as i64) as usize
}

/// The grid cell enclosing an off-grid location.
///
/// `cell` is the (already wrapped) index of the sample at or to the left of
/// the location in logical index order; `alpha` is the fractional offset
/// towards `cell + 1`, in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Departure {
    /// Wrapped index of the left-hand sample, in `[0, len)`.
    pub cell: usize,
    /// Fractional offset within the cell, in `[0, 1)`.
    pub alpha: f64,
}

impl Departure {
    /// Locate fractional logical index `s` on a periodic grid of `len` cells.
    ///
    /// `s` is reduced modulo `len` before flooring, so arbitrarily large
    /// displacements never overflow the integer index.
    pub fn from_fractional_index(s: f64, len: usize) -> Self {
        let reduced = s.rem_euclid(len as f64);
        let whole = reduced.floor();
        Self {
            cell: wrap_index(whole as i64, len),
            alpha: reduced - whole,
        }
    }

    /// Logical index of a stencil point at `offset` cells from `cell`, wrapped.
    #[inline]
    pub fn neighbour(&self, offset: i64, len: usize) -> usize {
        wrap_index(self.cell as i64 + offset, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── wrap_index ──────────────────────────────────────────────

    #[test]
    fn wrap_in_range_is_identity() {
        for i in 0..5 {
            assert_eq!(wrap_index(i, 5), i as usize);
        }
    }

    #[test]
    fn wrap_negative() {
        assert_eq!(wrap_index(-1, 5), 4);
        assert_eq!(wrap_index(-5, 5), 0);
        assert_eq!(wrap_index(-6, 5), 4);
    }

    #[test]
    fn wrap_past_end() {
        assert_eq!(wrap_index(5, 5), 0);
        assert_eq!(wrap_index(7, 5), 2);
    }

    proptest! {
        #[test]
        fn wrap_is_periodic(
            idx in -1_000_000i64..1_000_000,
            len in 1usize..512,
            k in -1000i64..1000,
        ) {
            let shifted = idx + k * len as i64;
            prop_assert_eq!(wrap_index(shifted, len), wrap_index(idx, len));
        }

        #[test]
        fn wrap_lands_in_range(idx in any::<i32>(), len in 1usize..512) {
            prop_assert!(wrap_index(idx as i64, len) < len);
        }
    }

    // ── Departure ───────────────────────────────────────────────

    #[test]
    fn one_cell_left_of_origin_wraps_to_last() {
        let d = Departure::from_fractional_index(-1.0, 4);
        assert_eq!(d, Departure { cell: 3, alpha: 0.0 });
    }

    #[test]
    fn fractional_left_of_origin() {
        let d = Departure::from_fractional_index(-0.25, 4);
        assert_eq!(d.cell, 3);
        assert_eq!(d.alpha, 0.75);
    }

    #[test]
    fn many_revolutions() {
        let d = Departure::from_fractional_index(4.0 * 1e6 + 2.5, 4);
        assert_eq!(d.cell, 2);
        assert_eq!(d.alpha, 0.5);
    }

    #[test]
    fn neighbour_wraps_both_ways() {
        let d = Departure {
            cell: 0,
            alpha: 0.0,
        };
        assert_eq!(d.neighbour(-1, 4), 3);
        assert_eq!(d.neighbour(2, 4), 2);
        let d = Departure {
            cell: 3,
            alpha: 0.0,
        };
        assert_eq!(d.neighbour(1, 4), 0);
        assert_eq!(d.neighbour(2, 4), 1);
    }

    proptest! {
        #[test]
        fn alpha_in_unit_interval(s in -1e6f64..1e6, len in 2usize..256) {
            let d = Departure::from_fractional_index(s, len);
            prop_assert!(d.cell < len);
            prop_assert!((0.0..1.0).contains(&d.alpha));
        }
    }
}

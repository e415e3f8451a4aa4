//! Test fixtures for drift development.
//!
//! Deterministic grids and initial profiles shared by unit tests,
//! integration tests and benchmarks. Random profiles are seeded with
//! `ChaCha8Rng` so every run sees the same data.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use std::f64::consts::PI;

/// `len` positions `origin + i * spacing`.
pub fn uniform_positions(origin: f64, spacing: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| origin + i as f64 * spacing).collect()
}

/// `len` integer positions `0, 1, ..., len - 1`.
///
/// Integer grids make whole-cell shifts exact in floating point.
pub fn integer_positions(len: usize) -> Vec<f64> {
    uniform_positions(0.0, 1.0, len)
}

/// The same value at every position.
pub fn constant(len: usize, value: f64) -> Vec<f64> {
    vec![value; len]
}

/// One period of a sine wave across `positions`, assuming a domain of
/// length `period`.
pub fn sine_wave(positions: &[f64], period: f64) -> Vec<f64> {
    positions
        .iter()
        .map(|x| (2.0 * PI * x / period).sin())
        .collect()
}

/// A top-hat: `1.0` for indices in `[start, end)`, `0.0` elsewhere.
pub fn top_hat(len: usize, start: usize, end: usize) -> Vec<f64> {
    (0..len)
        .map(|i| if (start..end).contains(&i) { 1.0 } else { 0.0 })
        .collect()
}

/// Uniform random values in `[-1, 1)`, deterministic per `seed`.
pub fn random_values(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(-1.0..1.0)).collect()
}

/// Rotate `values` right by `cells` (what an exact advection by
/// `cells` whole cells at positive speed produces).
pub fn rotated_right(values: &[f64], cells: usize) -> Vec<f64> {
    let mut out = values.to_vec();
    if !out.is_empty() {
        out.rotate_right(cells % values.len());
    }
    out
}

/// Largest absolute element-wise difference.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "length mismatch");
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_values_are_deterministic() {
        assert_eq!(random_values(16, 7), random_values(16, 7));
        assert_ne!(random_values(16, 7), random_values(16, 8));
        assert!(random_values(64, 1).iter().all(|v| (-1.0..1.0).contains(v)));
    }

    #[test]
    fn rotated_right_moves_samples_forward() {
        assert_eq!(rotated_right(&[1.0, 2.0, 3.0], 1), vec![3.0, 1.0, 2.0]);
        assert_eq!(rotated_right(&[1.0, 2.0, 3.0], 4), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn top_hat_bounds() {
        assert_eq!(top_hat(5, 1, 3), vec![0.0, 1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn sine_wave_starts_at_zero() {
        let xs = uniform_positions(0.0, 0.25, 4);
        let s = sine_wave(&xs, 1.0);
        assert_eq!(s[0], 0.0);
        assert!((s[1] - 1.0).abs() < 1e-15);
    }
}

//! Benchmark profiles for drift.
//!
//! Provides pre-built [`Field`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 1024-point sine wave at Courant number 0.37
//! - [`stress_profile`]: 1M-point random field at Courant number 2.6

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use drift::Field;
use drift_test_utils::{random_values, sine_wave, uniform_positions};

/// Build a reference benchmark profile: 1024 points on `[0, 1)`.
///
/// Speed 1.0 with `dt = 0.37 / 1024`, so departure points are never aligned
/// with the grid and every kernel weight is non-trivial.
pub fn reference_profile() -> Field {
    let n = 1024;
    let positions = uniform_positions(0.0, 1.0 / n as f64, n);
    let values = sine_wave(&positions, 1.0);
    Field::new(positions, values, 1.0, 0.37 / n as f64).unwrap()
}

/// Build a stress benchmark profile: 2^20 points, several cells per step.
pub fn stress_profile(seed: u64) -> Field {
    let n = 1 << 20;
    let positions = uniform_positions(0.0, 1.0, n);
    let values = random_values(n, seed);
    Field::new(positions, values, -2.6, 1.0).unwrap()
}

//! drift: semi-Lagrangian advection of scalar fields on periodic 1D grids.
//!
//! This is the top-level crate. It owns the [`Field`] integrator and
//! re-exports the grid and kernel sub-crates, so adding `drift` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use drift::prelude::*;
//!
//! let positions: Vec<f64> = (0..64).map(|i| i as f64 / 64.0).collect();
//! let values: Vec<f64> = positions
//!     .iter()
//!     .map(|x| (2.0 * std::f64::consts::PI * x).sin())
//!     .collect();
//!
//! let mut field = Field::new(positions, values, 1.0, 1.0 / 256.0).unwrap();
//!
//! // A quarter cell per step; 256 steps is one full revolution.
//! let after = field.evolve(Scheme::Cubic, 256).to_vec();
//! assert_eq!(after.len(), 64);
//! assert!((field.elapsed() - 1.0).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `drift-grid` | `PeriodicGrid`, `wrap_index`, `Departure`, `Tolerance`, `GridError` |
//! | [`kernels`] | `drift-kernels` | `Kernel` trait, `Linear`, `CubicLagrange`, `Scheme` |
//!
//! # Logging
//!
//! The integrator emits [`tracing`] events: `debug` on construction and after
//! each evolve call, `trace` per sub-step. No subscriber is installed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod field;
pub mod metrics;

pub use config::{ConfigError, FieldBuilder, FieldConfig};
pub use field::Field;
pub use metrics::EvolveMetrics;

pub use drift_grid::{GridError, Tolerance};
pub use drift_kernels::Scheme;

/// Periodic grids and index arithmetic (`drift-grid`).
pub use drift_grid as grid;

/// Interpolation kernels (`drift-kernels`).
///
/// Implement [`kernels::Kernel`] to plug a custom kernel into
/// [`Field::evolve_with`].
pub use drift_kernels as kernels;

/// Common imports for typical drift usage.
///
/// ```rust
/// use drift::prelude::*;
/// ```
pub mod prelude {
    // Integrator
    pub use crate::{ConfigError, EvolveMetrics, Field, FieldBuilder, FieldConfig};

    // Grid
    pub use drift_grid::{wrap_index, Departure, GridError, PeriodicGrid, Tolerance};

    // Kernels
    pub use drift_kernels::{CubicLagrange, Kernel, Linear, Scheme};
}

//! Periodic one-dimensional grids for drift.
//!
//! This crate defines [`PeriodicGrid`], the validated equidistant lattice
//! every advection step runs on, together with the index arithmetic shared
//! by all interpolation kernels:
//!
//! - [`wrap_index`]: always-non-negative periodic wraparound
//! - [`Departure`]: the cell and fractional offset enclosing an off-grid point
//! - [`Tolerance`]: exact or relative equidistance checking
//!
//! # Examples
//!
//! ```
//! use drift_grid::{GridError, PeriodicGrid, Tolerance};
//!
//! let grid = PeriodicGrid::new(vec![0.0, 0.5, 1.0, 1.5], Tolerance::default()).unwrap();
//! let d = grid.departure(0, 0.25);
//! assert_eq!(d.cell, 3);
//! assert_eq!(d.alpha, 0.5);
//!
//! let err = PeriodicGrid::new(vec![0.0, 1.0, 3.0], Tolerance::default()).unwrap_err();
//! assert!(matches!(err, GridError::NonEquidistant { index: 2, .. }));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod departure;
pub mod error;
pub mod grid;
pub mod tolerance;

pub use departure::{wrap_index, Departure};
pub use error::GridError;
pub use grid::PeriodicGrid;
pub use tolerance::Tolerance;

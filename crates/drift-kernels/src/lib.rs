//! Periodic interpolation kernels for drift.
//!
//! Provides the [`Kernel`] trait and the two built-in kernels used by the
//! semi-Lagrangian integrator:
//!
//! - [`Linear`]: two-point, first order
//! - [`CubicLagrange`]: four-point, exact for cubics
//!
//! [`Scheme`] names the built-ins for configuration and logging.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod cubic;
pub mod kernel;
pub mod linear;
pub mod scheme;

pub use cubic::CubicLagrange;
pub use kernel::{Kernel, Weights};
pub use linear::Linear;
pub use scheme::{Scheme, UnknownScheme};

//! Built-in interpolation scheme selector.

use crate::cubic::CubicLagrange;
use crate::kernel::Kernel;
use crate::linear::Linear;
use std::fmt;
use std::str::FromStr;

static LINEAR: Linear = Linear;
static CUBIC: CubicLagrange = CubicLagrange;

/// One of the built-in interpolation kernels.
///
/// Parses from `"linear"` or `"cubic"` (case-insensitive):
///
/// ```
/// use drift_kernels::Scheme;
///
/// let s: Scheme = "Cubic".parse().unwrap();
/// assert_eq!(s, Scheme::Cubic);
/// assert_eq!(s.to_string(), "cubic");
/// assert_eq!(s.kernel().stencil(), &[-1, 0, 1, 2]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Two-point linear interpolation ([`Linear`]).
    Linear,
    /// Four-point cubic Lagrange interpolation ([`CubicLagrange`]).
    Cubic,
}

impl Scheme {
    /// All built-in schemes, in order of increasing stencil width.
    pub const ALL: [Scheme; 2] = [Scheme::Linear, Scheme::Cubic];

    /// The kernel implementing this scheme.
    pub fn kernel(self) -> &'static dyn Kernel {
        match self {
            Self::Linear => &LINEAR,
            Self::Cubic => &CUBIC,
        }
    }

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Cubic => "cubic",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognised scheme name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownScheme {
    /// The name that failed to parse.
    pub name: String,
}

impl fmt::Display for UnknownScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown interpolation scheme '{}' (expected 'linear' or 'cubic')",
            self.name
        )
    }
}

impl std::error::Error for UnknownScheme {}

impl FromStr for Scheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownScheme { name: s.to_string() })
    }
}

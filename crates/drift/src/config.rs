//! Field configuration, validation, and error types.
//!
//! [`FieldConfig`] is the plain-struct input for constructing a [`Field`];
//! [`FieldBuilder`] is the builder-pattern front end over the same checks.
//! Both funnel into [`Field::from_config`], which is the only place a grid
//! is validated.

use std::error::Error;
use std::fmt;

use drift_grid::{GridError, Tolerance};

use crate::field::Field;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while constructing a [`Field`].
///
/// Every variant is fatal: a field that fails construction never exists.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The grid or its sample array is invalid.
    Grid(GridError),
    /// A required builder input was never set.
    MissingField {
        /// Name of the missing input.
        field: &'static str,
    },
    /// A scalar parameter, or a quantity derived from them, is NaN or
    /// infinite.
    InvalidParameter {
        /// Name of the parameter or derived quantity.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::MissingField { field } => write!(f, "{field} is required"),
            Self::InvalidParameter { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── FieldConfig ────────────────────────────────────────────────────

/// Complete input for constructing a [`Field`].
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Grid positions. At least two, evenly spaced.
    pub positions: Vec<f64>,
    /// Initial samples, one per position.
    pub values: Vec<f64>,
    /// Constant advection velocity (any sign).
    pub speed: f64,
    /// Time advanced by each sub-step.
    pub time_step: f64,
    /// Equidistance check applied to `positions`. Default: relative, 1e-9.
    pub tolerance: Tolerance,
}

impl FieldConfig {
    /// Check the scalar parameters. Grid checks happen in
    /// [`Field::from_config`], which consumes the position array.
    ///
    /// Finite `speed` and `time_step` can still overflow when multiplied, so
    /// the per-step displacement is checked as well.
    pub fn validate_parameters(&self) -> Result<(), ConfigError> {
        if !self.speed.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "speed",
                value: self.speed,
            });
        }
        if !self.time_step.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "time_step",
                value: self.time_step,
            });
        }
        let displacement = self.speed * self.time_step;
        if !displacement.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "displacement",
                value: displacement,
            });
        }
        Ok(())
    }
}

// ── FieldBuilder ───────────────────────────────────────────────────

/// Builder for [`Field`].
///
/// Every physical input is required: `positions`, `values`, `speed` and
/// `time_step`. Only `tolerance` has a default, [`Tolerance::default()`].
///
/// ```
/// use drift::{Field, Tolerance};
///
/// let field = Field::builder()
///     .positions(vec![0.0, 0.25, 0.5, 0.75])
///     .values(vec![1.0, 0.0, 0.0, 0.0])
///     .speed(0.5)
///     .time_step(0.5)
///     .tolerance(Tolerance::Exact)
///     .build()
///     .unwrap();
/// assert_eq!(field.courant_number(), 1.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldBuilder {
    positions: Option<Vec<f64>>,
    values: Option<Vec<f64>>,
    speed: Option<f64>,
    time_step: Option<f64>,
    tolerance: Tolerance,
}

impl FieldBuilder {
    /// Set the grid positions.
    pub fn positions(mut self, positions: Vec<f64>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Set the initial samples.
    pub fn values(mut self, values: Vec<f64>) -> Self {
        self.values = Some(values);
        self
    }

    /// Set the advection speed.
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Set the time advanced per sub-step.
    pub fn time_step(mut self, time_step: f64) -> Self {
        self.time_step = Some(time_step);
        self
    }

    /// Set the equidistance tolerance.
    pub fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Collect the inputs into a [`FieldConfig`] without validating the grid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if a required input is unset.
    pub fn into_config(self) -> Result<FieldConfig, ConfigError> {
        let positions = self
            .positions
            .ok_or(ConfigError::MissingField { field: "positions" })?;
        let values = self
            .values
            .ok_or(ConfigError::MissingField { field: "values" })?;
        let speed = self
            .speed
            .ok_or(ConfigError::MissingField { field: "speed" })?;
        let time_step = self
            .time_step
            .ok_or(ConfigError::MissingField { field: "time_step" })?;
        Ok(FieldConfig {
            positions,
            values,
            speed,
            time_step,
            tolerance: self.tolerance,
        })
    }

    /// Build the field, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a required input is missing, a scalar parameter is
    /// not finite, or the grid fails validation (see [`Field::from_config`]).
    pub fn build(self) -> Result<Field, ConfigError> {
        Field::from_config(self.into_config()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_builder() -> FieldBuilder {
        FieldBuilder::default()
            .positions(vec![0.0, 1.0, 2.0])
            .values(vec![1.0, 2.0, 3.0])
            .speed(1.0)
            .time_step(0.1)
    }

    #[test]
    fn builder_defaults() {
        let config = valid_builder().into_config().unwrap();
        assert_eq!(config.speed, 1.0);
        assert_eq!(config.tolerance, Tolerance::default());
    }

    #[test]
    fn builder_requires_positions() {
        let r = FieldBuilder::default()
            .values(vec![1.0])
            .speed(1.0)
            .time_step(1.0)
            .into_config();
        assert_eq!(r, Err(ConfigError::MissingField { field: "positions" }));
    }

    #[test]
    fn builder_requires_values() {
        let r = FieldBuilder::default()
            .positions(vec![0.0, 1.0])
            .speed(1.0)
            .time_step(1.0)
            .into_config();
        assert_eq!(r, Err(ConfigError::MissingField { field: "values" }));
    }

    #[test]
    fn builder_requires_speed() {
        let r = FieldBuilder::default()
            .positions(vec![0.0, 1.0])
            .values(vec![0.0, 1.0])
            .time_step(1.0)
            .into_config();
        assert_eq!(r, Err(ConfigError::MissingField { field: "speed" }));
    }

    #[test]
    fn builder_requires_time_step() {
        let r = FieldBuilder::default()
            .positions(vec![0.0, 1.0])
            .values(vec![0.0, 1.0])
            .speed(1.0)
            .into_config();
        assert_eq!(r, Err(ConfigError::MissingField { field: "time_step" }));
    }

    #[test]
    fn validate_rejects_nan_speed() {
        let config = valid_builder().speed(f64::NAN).into_config().unwrap();
        assert!(matches!(
            config.validate_parameters(),
            Err(ConfigError::InvalidParameter { name: "speed", .. })
        ));
    }

    #[test]
    fn validate_rejects_infinite_time_step() {
        let config = valid_builder()
            .time_step(f64::INFINITY)
            .into_config()
            .unwrap();
        assert!(matches!(
            config.validate_parameters(),
            Err(ConfigError::InvalidParameter {
                name: "time_step",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_overflowing_displacement() {
        let config = valid_builder()
            .speed(1e200)
            .time_step(1e200)
            .into_config()
            .unwrap();
        assert_eq!(
            config.validate_parameters(),
            Err(ConfigError::InvalidParameter {
                name: "displacement",
                value: f64::INFINITY,
            })
        );
        let config = valid_builder()
            .speed(-1e200)
            .time_step(1e200)
            .into_config()
            .unwrap();
        assert!(matches!(
            config.validate_parameters(),
            Err(ConfigError::InvalidParameter {
                name: "displacement",
                ..
            })
        ));
    }

    #[test]
    fn grid_error_is_the_source() {
        let e = ConfigError::from(GridError::TooFewPoints { len: 1 });
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "grid: grid needs at least 2 positions, got 1");
        assert!(ConfigError::MissingField { field: "values" }
            .source()
            .is_none());
    }
}

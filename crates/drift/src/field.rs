//! The semi-Lagrangian field integrator.
//!
//! Each sub-step traces every grid point back by `speed * time_step` to its
//! departure point and interpolates the previous values there. The whole new
//! array is built from one snapshot before it replaces the live values.

use std::time::Instant;

use drift_grid::{Departure, PeriodicGrid};
use drift_kernels::{Kernel, Scheme};
use tracing::{debug, instrument, trace};

use crate::config::{ConfigError, FieldBuilder, FieldConfig};
use crate::metrics::EvolveMetrics;

/// A scalar field on a periodic equidistant grid, advected at constant speed.
///
/// The grid, speed and time step are fixed at construction. Only the sample
/// values change, and only through the evolve methods.
///
/// # Examples
///
/// ```
/// use drift::Field;
///
/// let mut field = Field::new(
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![0.0, 1.0, 0.0, 1.0],
///     1.0,
///     1.0,
/// )
/// .unwrap();
///
/// // One cell per step: every sample moves one position to the right.
/// assert_eq!(field.linear_evolve(1), &[1.0, 0.0, 1.0, 0.0]);
/// assert_eq!(field.steps_taken(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Field {
    grid: PeriodicGrid,
    values: Vec<f64>,
    /// Back buffer, swapped with `values` after each sub-step.
    scratch: Vec<f64>,
    /// Departure point of every grid index. Grid, speed and time step are
    /// immutable, so these never change.
    departures: Vec<Departure>,
    speed: f64,
    time_step: f64,
    steps_taken: u64,
    last_metrics: EvolveMetrics,
}

impl Field {
    /// Construct a field with the default equidistance tolerance.
    ///
    /// # Errors
    ///
    /// See [`Field::from_config`].
    pub fn new(
        positions: Vec<f64>,
        values: Vec<f64>,
        speed: f64,
        time_step: f64,
    ) -> Result<Self, ConfigError> {
        Self::from_config(FieldConfig {
            positions,
            values,
            speed,
            time_step,
            tolerance: Default::default(),
        })
    }

    /// Create a new builder for configuring a field.
    pub fn builder() -> FieldBuilder {
        FieldBuilder::default()
    }

    /// Construct a field from a complete configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidParameter`] if `speed`, `time_step`, their
    ///   product, or the resulting Courant number is not finite.
    /// - [`ConfigError::Grid`] wrapping
    ///   [`GridError::InvalidGrid`](drift_grid::GridError::InvalidGrid) if
    ///   positions and values differ in length, or any other
    ///   [`GridError`](drift_grid::GridError) from
    ///   [`PeriodicGrid::new`].
    pub fn from_config(config: FieldConfig) -> Result<Self, ConfigError> {
        config.validate_parameters()?;
        let FieldConfig {
            positions,
            values,
            speed,
            time_step,
            tolerance,
        } = config;

        if positions.len() != values.len() {
            return Err(drift_grid::GridError::InvalidGrid {
                positions: positions.len(),
                values: values.len(),
            }
            .into());
        }
        let grid = PeriodicGrid::new(positions, tolerance)?;

        // A finite displacement can still overflow once divided by a tiny spacing.
        let courant = speed * time_step / grid.spacing();
        if !courant.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "courant_number",
                value: courant,
            });
        }
        let displacement = speed * time_step;
        let departures = (0..grid.len())
            .map(|i| grid.departure(i, displacement))
            .collect();

        let field = Self {
            scratch: vec![0.0; values.len()],
            departures,
            grid,
            values,
            speed,
            time_step,
            steps_taken: 0,
            last_metrics: EvolveMetrics::default(),
        };
        debug!(
            len = field.len(),
            spacing = field.spacing(),
            speed,
            time_step,
            courant = field.courant_number(),
            "field constructed"
        );
        Ok(field)
    }

    /// Advance `steps` sub-steps with linear interpolation.
    ///
    /// Returns the values after the final sub-step. `steps == 0` is a no-op.
    pub fn linear_evolve(&mut self, steps: usize) -> &[f64] {
        self.evolve(Scheme::Linear, steps)
    }

    /// Advance `steps` sub-steps with cubic Lagrange interpolation.
    ///
    /// Returns the values after the final sub-step. `steps == 0` is a no-op.
    pub fn cubic_evolve(&mut self, steps: usize) -> &[f64] {
        self.evolve(Scheme::Cubic, steps)
    }

    /// Advance `steps` sub-steps with a built-in scheme.
    pub fn evolve(&mut self, scheme: Scheme, steps: usize) -> &[f64] {
        self.evolve_with(scheme.kernel(), steps)
    }

    /// Advance `steps` sub-steps with an arbitrary kernel.
    ///
    /// Sub-steps run strictly in sequence. Within a sub-step every cell reads
    /// from the same snapshot of the previous values.
    #[instrument(skip(self, kernel), fields(kernel = kernel.name(), len = self.values.len()))]
    pub fn evolve_with(&mut self, kernel: &dyn Kernel, steps: usize) -> &[f64] {
        let start = Instant::now();

        let mut max_abs_change = 0.0f64;
        for step in 0..steps {
            for (out, &at) in self.scratch.iter_mut().zip(&self.departures) {
                *out = kernel.sample(&self.values, at);
            }
            if step + 1 == steps {
                max_abs_change = self
                    .scratch
                    .iter()
                    .zip(&self.values)
                    .map(|(new, old)| (new - old).abs())
                    .fold(0.0, f64::max);
            }
            std::mem::swap(&mut self.values, &mut self.scratch);
            self.steps_taken += 1;
            trace!(step, "sub-step complete");
        }

        self.last_metrics = EvolveMetrics {
            kernel: kernel.name().to_string(),
            steps,
            total_us: start.elapsed().as_micros() as u64,
            max_abs_change,
        };
        debug!(
            steps,
            total_us = self.last_metrics.total_us,
            max_abs_change,
            elapsed = self.elapsed(),
            "evolve complete"
        );
        &self.values
    }

    /// Current sample values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the field and return its sample values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Grid positions.
    pub fn positions(&self) -> &[f64] {
        self.grid.positions()
    }

    /// The validated grid.
    pub fn grid(&self) -> &PeriodicGrid {
        &self.grid
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always returns `false`: construction rejects grids with fewer than two points.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Advection speed.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Time advanced per sub-step.
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Distance between neighbouring grid points (always positive).
    pub fn spacing(&self) -> f64 {
        self.grid.spacing()
    }

    /// Total sub-steps applied since construction.
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Simulated time advanced since construction.
    pub fn elapsed(&self) -> f64 {
        self.steps_taken as f64 * self.time_step
    }

    /// Cells travelled per sub-step: `speed * time_step / spacing`.
    ///
    /// Informational only. No stability limit is enforced.
    pub fn courant_number(&self) -> f64 {
        self.speed * self.time_step / self.spacing()
    }

    /// Metrics from the most recent evolve call.
    pub fn last_metrics(&self) -> &EvolveMetrics {
        &self.last_metrics
    }
}

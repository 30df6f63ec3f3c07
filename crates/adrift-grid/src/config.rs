//! Run configuration for a grid-and-paths advection run.

use crate::grid::{checked_cell_count, Grid};
use adrift_core::{ConfigError, Position};

/// The parameter set an external driver supplies for one advection run.
///
/// The simulator does not parse parameter files; a loader collaborator is
/// expected to produce a `RunConfig` from whatever format it speaks and
/// call [`validate`](RunConfig::validate) before building anything. All
/// checks here are also enforced by the operations themselves; this type
/// exists so a driver can reject a bad run before allocating a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Number of spatial dimensions.
    pub dimensions: usize,
    /// Cells along each axis.
    pub cells_per_dimension: usize,
    /// Per-axis extent of the simulation volume.
    pub box_size: f64,
    /// Number of tracer paths to seed.
    pub path_count: usize,
    /// Number of advection steps to run. Zero is a legal no-op run.
    pub step_count: usize,
    /// Displacement scale per step.
    pub step_size: f64,
}

impl RunConfig {
    /// Check every parameter without allocating anything.
    ///
    /// # Errors
    ///
    /// The same [`ConfigError`]s grid construction and seeding would
    /// raise, plus [`ConfigError::ZeroPaths`] and
    /// [`ConfigError::InvalidStepSize`] for the run-level parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        checked_cell_count(self.dimensions, self.cells_per_dimension, self.box_size)?;
        if self.path_count == 0 {
            return Err(ConfigError::ZeroPaths);
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(ConfigError::InvalidStepSize {
                value: self.step_size,
            });
        }
        Ok(())
    }

    /// Starting points that seed every path at the center of the box.
    pub fn center_starting_points(&self) -> Vec<Position> {
        let center: Position = (0..self.dimensions).map(|_| self.box_size / 2.0).collect();
        vec![center; self.path_count]
    }

    /// Validate, construct the grid, and seed the configured number of
    /// paths at the box center.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`validate`](RunConfig::validate).
    pub fn build_grid(&self) -> Result<Grid, ConfigError> {
        self.validate()?;
        let mut grid = Grid::new(self.dimensions, self.cells_per_dimension, self.box_size)?;
        grid.seed_paths(&self.center_starting_points())?;
        Ok(grid)
    }
}

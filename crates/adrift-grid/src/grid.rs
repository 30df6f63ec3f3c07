//! The N-dimensional cell grid and the advection loop driven across it.

use crate::cell::Cell;
use crate::field::Field;
use crate::odometer::MultiIndexIter;
use crate::path::Path;
use adrift_core::{
    AdvectError, AssignError, ConfigError, LookupError, MultiIndex, Position,
};
use log::{debug, trace};
use std::fmt;

/// Validate grid shape parameters and return the total cell count.
///
/// Shared by [`Grid::new`] and run-configuration validation so both reject
/// the same inputs for the same reasons.
pub(crate) fn checked_cell_count(
    dimensions: usize,
    cells_per_dimension: usize,
    box_size: f64,
) -> Result<usize, ConfigError> {
    if dimensions == 0 {
        return Err(ConfigError::ZeroDimensions);
    }
    if cells_per_dimension == 0 {
        return Err(ConfigError::ZeroCellsPerDimension);
    }
    if !box_size.is_finite() || box_size <= 0.0 {
        return Err(ConfigError::NonPositiveBoxSize { value: box_size });
    }
    let too_many = || ConfigError::TooManyCells {
        cells_per_dimension,
        dimensions,
        limit: Grid::MAX_CELLS,
    };
    let exponent = u32::try_from(dimensions).map_err(|_| too_many())?;
    (cells_per_dimension as u128)
        .checked_pow(exponent)
        .filter(|&count| count <= Grid::MAX_CELLS as u128)
        .map(|count| count as usize)
        .ok_or_else(too_many)
}

/// The full N-dimensional array of cells plus the set of paths traversing
/// it.
///
/// A grid discretizes the cube `[0, box_size)^dimensions` into
/// `cells_per_dimension` equal cells along every axis, stored densely in
/// canonical row-major order. The cell at multi-index `(i_0, ..., i_N-1)`
/// is centered at `location[d] = (2 * i_d + 1) * cell_width / 2`.
///
/// The cell array is immutable in shape after construction; field
/// assignment mutates cell values in place, and path seeding and advection
/// mutate the owned path set.
pub struct Grid {
    dimensions: usize,
    cells_per_dimension: usize,
    box_size: f64,
    cell_width: f64,
    cells: Vec<Cell>,
    paths: Vec<Path>,
}

impl Grid {
    /// Maximum total cell count a grid will allocate.
    ///
    /// The cell array is dense, so memory grows as
    /// `cells_per_dimension ^ dimensions`, exponential in dimension
    /// count. Requests above this cap fail with
    /// [`ConfigError::TooManyCells`] instead of exhausting memory.
    pub const MAX_CELLS: usize = 1 << 24;

    /// Construct a grid and initialize every cell's center and width.
    ///
    /// Cells are visited in the canonical row-major order of
    /// [`MultiIndexIter`], so two grids built from identical parameters
    /// are identical.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if `dimensions` or `cells_per_dimension` is zero,
    /// `box_size` is not finite and positive, or the total cell count
    /// exceeds [`Grid::MAX_CELLS`].
    pub fn new(
        dimensions: usize,
        cells_per_dimension: usize,
        box_size: f64,
    ) -> Result<Self, ConfigError> {
        let cell_count = checked_cell_count(dimensions, cells_per_dimension, box_size)?;
        let cell_width = box_size / cells_per_dimension as f64;

        let mut cells = Vec::with_capacity(cell_count);
        for index in MultiIndexIter::new(dimensions, cells_per_dimension) {
            // The center sits (2k + 1) half-widths from the origin along
            // an axis with cell index k.
            let location: Position = index
                .iter()
                .map(|&i| (2 * i + 1) as f64 * cell_width / 2.0)
                .collect();
            cells.push(Cell::new(location, cell_width));
        }

        debug!(
            "constructed {dimensions}-dimensional grid: {cell_count} cells of width {cell_width}"
        );
        Ok(Self {
            dimensions,
            cells_per_dimension,
            box_size,
            cell_width,
            cells,
            paths: Vec::new(),
        })
    }

    /// Number of spatial dimensions.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Cells along each axis.
    pub fn cells_per_dimension(&self) -> usize {
        self.cells_per_dimension
    }

    /// Per-axis extent of the simulation volume.
    pub fn box_size(&self) -> f64 {
        self.box_size
    }

    /// Cell width, `box_size / cells_per_dimension`, identical on every
    /// axis.
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// All cells in canonical row-major order, read-only.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Enumerate the grid's multi-indices in canonical row-major order.
    pub fn indices(&self) -> MultiIndexIter {
        MultiIndexIter::new(self.dimensions, self.cells_per_dimension)
    }

    /// All paths in seed order, read-only.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Mutable access to the paths, for folding path-integrated
    /// quantities into their accumulators.
    pub fn paths_mut(&mut self) -> &mut [Path] {
        &mut self.paths
    }

    fn check_index(&self, index: &[usize]) -> Result<(), LookupError> {
        if index.len() != self.dimensions {
            return Err(LookupError::DimensionMismatch {
                expected: self.dimensions,
                got: index.len(),
            });
        }
        for (axis, &i) in index.iter().enumerate() {
            if i >= self.cells_per_dimension {
                return Err(LookupError::IndexOutOfBounds {
                    axis,
                    index: i,
                    cells_per_dimension: self.cells_per_dimension,
                });
            }
        }
        Ok(())
    }

    fn storage_rank(&self, index: &[usize]) -> usize {
        index
            .iter()
            .fold(0, |rank, &i| rank * self.cells_per_dimension + i)
    }

    /// Position of a multi-index in the canonical row-major enumeration,
    /// which is also its offset in [`Grid::cells`].
    ///
    /// # Errors
    ///
    /// [`LookupError`] if the index has the wrong arity or any component
    /// is out of range.
    pub fn flat_rank(&self, index: &MultiIndex) -> Result<usize, LookupError> {
        self.check_index(index)?;
        Ok(self.storage_rank(index))
    }

    /// The cell at a multi-index.
    ///
    /// # Errors
    ///
    /// [`LookupError`] if the index has the wrong arity or any component
    /// is out of range. Out-of-range indices are never wrapped or
    /// clamped.
    pub fn cell(&self, index: &MultiIndex) -> Result<&Cell, LookupError> {
        let rank = self.flat_rank(index)?;
        Ok(&self.cells[rank])
    }

    /// Map a continuous coordinate to the multi-index of the owning cell.
    ///
    /// Each cell owns the half-open region `[i * width, (i + 1) * width)`
    /// along every axis, so the owning index is `floor(coordinate /
    /// cell_width)` per axis.
    ///
    /// # Errors
    ///
    /// [`LookupError::DimensionMismatch`] if the position's arity differs
    /// from the grid's; [`LookupError::PositionOutOfBounds`] if any
    /// coordinate is negative, not finite, or at least `box_size`. A
    /// coordinate of exactly `box_size` is outside the volume.
    pub fn cell_index_for(&self, position: &[f64]) -> Result<MultiIndex, LookupError> {
        if position.len() != self.dimensions {
            return Err(LookupError::DimensionMismatch {
                expected: self.dimensions,
                got: position.len(),
            });
        }
        let mut index = MultiIndex::with_capacity(self.dimensions);
        for (axis, &coordinate) in position.iter().enumerate() {
            let out_of_bounds = || LookupError::PositionOutOfBounds {
                axis,
                coordinate,
                box_size: self.box_size,
            };
            if !coordinate.is_finite() || coordinate < 0.0 {
                return Err(out_of_bounds());
            }
            let i = (coordinate / self.cell_width).floor() as usize;
            if i >= self.cells_per_dimension {
                return Err(out_of_bounds());
            }
            index.push(i);
        }
        Ok(index)
    }

    /// Apply a field over the whole grid.
    ///
    /// Visits every cell in canonical row-major order, invokes the
    /// field's assignment function, and stores the returned value under
    /// the field's name, overwriting any previous entry for that name.
    /// Applying a deterministic field twice is idempotent.
    ///
    /// # Errors
    ///
    /// [`AssignError`] if the assignment function fails or returns a
    /// non-finite value. The pass aborts at the failing cell; cells
    /// visited earlier keep their newly assigned values.
    pub fn apply_field(&mut self, field: &Field) -> Result<(), AssignError> {
        debug!(
            "applying field '{}' over {} cells",
            field.name(),
            self.cells.len()
        );
        for index in self.indices() {
            let value =
                field
                    .assign(self, &index)
                    .map_err(|reason| AssignError::AssignmentFailed {
                        field: field.name().to_owned(),
                        index: index.clone(),
                        reason,
                    })?;
            if !value.is_finite() {
                return Err(AssignError::NonFiniteValue {
                    field: field.name().to_owned(),
                    index,
                });
            }
            let rank = self.storage_rank(&index);
            self.cells[rank].set_value(field.name(), value);
        }
        Ok(())
    }

    /// Replace the grid's path set with one new path per starting point,
    /// preserving input order.
    ///
    /// Seeding is not incremental: the previous path set is discarded.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyPathSet`] for an empty sequence;
    /// [`ConfigError::StartingPointDimensionMismatch`] if any starting
    /// point's arity differs from the grid's. On error the previous path
    /// set is left untouched.
    pub fn seed_paths(&mut self, starting_points: &[Position]) -> Result<(), ConfigError> {
        if starting_points.is_empty() {
            return Err(ConfigError::EmptyPathSet);
        }
        for (path, point) in starting_points.iter().enumerate() {
            if point.len() != self.dimensions {
                return Err(ConfigError::StartingPointDimensionMismatch {
                    path,
                    expected: self.dimensions,
                    got: point.len(),
                });
            }
        }
        self.paths = starting_points.iter().cloned().map(Path::new).collect();
        debug!("seeded {} paths", self.paths.len());
        Ok(())
    }

    /// Run the advection loop: `step_count` discrete steps, each kicking
    /// every path by the field value of the cell currently containing it.
    ///
    /// Per step, paths are visited in seed order. For each path: the
    /// path's step size is set, its current position is resolved to a
    /// cell, the field's value is read from that cell, the current
    /// position is archived to the path's history, and the position
    /// becomes `position + step_size * value`, component-wise. Steps are
    /// strictly sequential. A `step_count` of zero is a legal no-op.
    ///
    /// # Errors
    ///
    /// [`AdvectError`] naming the path and step on the first failure: a
    /// position that resolves to no cell, a field never applied to this
    /// grid, or a field value whose arity cannot displace a position.
    /// The whole call aborts (no path is silently skipped), and paths
    /// advanced before the failure keep their accumulated history and
    /// position.
    pub fn advect(
        &mut self,
        field: &Field,
        step_count: usize,
        step_size: f64,
    ) -> Result<(), AdvectError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(AdvectError::InvalidStepSize { value: step_size });
        }
        debug!(
            "advecting {} paths for {step_count} steps of {step_size} under field '{}'",
            self.paths.len(),
            field.name()
        );
        // The loop reads cells and mutates paths. Paths are taken out
        // for its duration and restored before returning, including on
        // failure, so a partial run keeps its progress.
        let mut paths = std::mem::take(&mut self.paths);
        let result = self.advect_paths(&mut paths, field, step_count, step_size);
        self.paths = paths;
        result
    }

    fn advect_paths(
        &self,
        paths: &mut [Path],
        field: &Field,
        step_count: usize,
        step_size: f64,
    ) -> Result<(), AdvectError> {
        for step in 0..step_count {
            for (path_index, path) in paths.iter_mut().enumerate() {
                path.set_step_size(step_size);
                let index = self
                    .cell_index_for(path.current_position())
                    .map_err(|source| AdvectError::PathOutOfBounds {
                        path: path_index,
                        step,
                        source,
                    })?;
                let cell = &self.cells[self.storage_rank(&index)];
                let value = cell.value(field.name()).ok_or_else(|| {
                    AdvectError::FieldNotAssigned {
                        field: field.name().to_owned(),
                        path: path_index,
                        step,
                    }
                })?;
                let kick = value.components();
                if kick.len() != self.dimensions {
                    return Err(AdvectError::KickDimensionMismatch {
                        field: field.name().to_owned(),
                        expected: self.dimensions,
                        got: kick.len(),
                        path: path_index,
                        step,
                    });
                }
                path.advance(kick, step_size);
            }
            trace!("advection step {step} complete");
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("dimensions", &self.dimensions)
            .field("cells_per_dimension", &self.cells_per_dimension)
            .field("box_size", &self.box_size)
            .field("cells", &self.cells.len())
            .field("paths", &self.paths.len())
            .finish()
    }
}

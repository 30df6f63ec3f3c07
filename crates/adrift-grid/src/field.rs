//! Named fields and their assignment functions.

use crate::grid::Grid;
use adrift_core::{FieldValue, MultiIndex};
use std::fmt;

/// The assignment function of a field.
///
/// Invoked once per cell during [`Grid::apply_field`] with the grid and
/// the cell's multi-index. It must be a pure read of grid-wide and
/// geometric context (dimensionality, cell locations, previously applied
/// fields) and must not rely on invocation order. An `Err` aborts the
/// assignment pass with the returned reason.
pub type AssignmentFn =
    dyn Fn(&Grid, &MultiIndex) -> Result<FieldValue, String> + Send + Sync;

/// A named quantity together with the rule for computing its value in any
/// cell.
///
/// A field is data plus behavior: a unique name (the key under which each
/// cell stores the assigned value) and a stored assignment function.
/// Fields carry no grid state of their own and can be applied to any
/// number of grids.
pub struct Field {
    name: String,
    assignment: Box<AssignmentFn>,
}

impl Field {
    /// Create a field from a name and an assignment function.
    pub fn new<F>(name: impl Into<String>, assignment: F) -> Self
    where
        F: Fn(&Grid, &MultiIndex) -> Result<FieldValue, String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            assignment: Box::new(assignment),
        }
    }

    /// The name under which this field's values are stored in each cell.
    ///
    /// Names must be unique among the fields applied to one grid: applying
    /// a second field with the same name overwrites the first's values.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn assign(
        &self,
        grid: &Grid,
        index: &MultiIndex,
    ) -> Result<FieldValue, String> {
        (self.assignment)(grid, index)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

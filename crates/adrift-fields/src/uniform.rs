//! A spatially uniform flow field.

use adrift_core::{FieldValue, MultiIndex};
use adrift_grid::{Field, Grid};
use smallvec::SmallVec;

/// A field assigning the same velocity vector to every cell.
///
/// Useful as the simplest possible current: every path drifts along the
/// same straight line. The velocity's arity is checked against the grid
/// at assignment time, so applying a 3-component flow to a 2-dimensional
/// grid fails the assignment pass rather than corrupting it.
#[derive(Clone, Debug)]
pub struct UniformFlow {
    name: String,
    velocity: SmallVec<[f64; 4]>,
}

impl UniformFlow {
    /// A uniform flow named `"uniform_flow"`.
    pub fn new(velocity: &[f64]) -> Self {
        Self::named("uniform_flow", velocity)
    }

    /// A uniform flow stored under a caller-chosen field name.
    pub fn named(name: impl Into<String>, velocity: &[f64]) -> Self {
        Self {
            name: name.into(),
            velocity: SmallVec::from_slice(velocity),
        }
    }

    /// Convert into an applicable [`Field`].
    pub fn into_field(self) -> Field {
        let Self { name, velocity } = self;
        Field::new(name, move |grid: &Grid, _: &MultiIndex| {
            if velocity.len() != grid.dimensions() {
                return Err(format!(
                    "velocity has {} components, grid has {} dimensions",
                    velocity.len(),
                    grid.dimensions()
                ));
            }
            Ok(FieldValue::Vector(velocity.clone()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adrift_core::AssignError;

    #[test]
    fn assigns_the_same_velocity_everywhere() {
        let mut grid = Grid::new(2, 3, 6.0).unwrap();
        grid.apply_field(&UniformFlow::new(&[1.0, -0.5]).into_field())
            .unwrap();
        for cell in grid.cells() {
            assert_eq!(
                cell.value("uniform_flow"),
                Some(&FieldValue::vector(&[1.0, -0.5]))
            );
        }
    }

    #[test]
    fn arity_mismatch_fails_the_assignment_pass() {
        let mut grid = Grid::new(2, 2, 4.0).unwrap();
        let err = grid
            .apply_field(&UniformFlow::new(&[1.0, 0.0, 0.0]).into_field())
            .unwrap_err();
        match err {
            AssignError::AssignmentFailed { field, reason, .. } => {
                assert_eq!(field, "uniform_flow");
                assert!(reason.contains("3 components"));
            }
            other => panic!("expected AssignmentFailed, got {other:?}"),
        }
    }
}

//! Error types for the Adrift advection simulator.
//!
//! One enum per subsystem: configuration/seeding ([`ConfigError`]),
//! spatial lookup ([`LookupError`]), field assignment ([`AssignError`]),
//! and the advection loop ([`AdvectError`]). Every operation is fail-fast
//! and non-recovering, since a failure reflects a configuration or
//! programming defect rather than a transient condition, and each variant
//! carries enough context (axis, index, path, step) to diagnose without
//! re-running.

use crate::index::MultiIndex;
use std::error::Error;
use std::fmt;

/// Errors from grid construction, path seeding, and run validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The grid must span at least one dimension.
    ZeroDimensions,
    /// Each axis must be divided into at least one cell.
    ZeroCellsPerDimension,
    /// The box size must be finite and positive.
    NonPositiveBoxSize {
        /// The rejected value.
        value: f64,
    },
    /// The total cell count `cells_per_dimension ^ dimensions` exceeds the
    /// practical limit. Cell count is exponential in dimension count.
    TooManyCells {
        /// Cells requested along each axis.
        cells_per_dimension: usize,
        /// Number of axes requested.
        dimensions: usize,
        /// The maximum total cell count accepted.
        limit: usize,
    },
    /// Path seeding was given an empty starting-point sequence.
    EmptyPathSet,
    /// A starting point's arity does not match the grid's dimensionality.
    StartingPointDimensionMismatch {
        /// Position of the offending point in the seeding sequence.
        path: usize,
        /// The grid's dimensionality.
        expected: usize,
        /// The starting point's component count.
        got: usize,
    },
    /// A run must advect at least one path.
    ZeroPaths,
    /// The configured step size must be finite and positive.
    InvalidStepSize {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimensions => write!(f, "grid must have at least one dimension"),
            Self::ZeroCellsPerDimension => {
                write!(f, "grid must have at least one cell per dimension")
            }
            Self::NonPositiveBoxSize { value } => {
                write!(f, "box size must be finite and positive, got {value}")
            }
            Self::TooManyCells {
                cells_per_dimension,
                dimensions,
                limit,
            } => write!(
                f,
                "grid of {cells_per_dimension}^{dimensions} cells exceeds the limit of {limit}"
            ),
            Self::EmptyPathSet => write!(f, "path seeding requires at least one starting point"),
            Self::StartingPointDimensionMismatch {
                path,
                expected,
                got,
            } => write!(
                f,
                "starting point {path} has {got} components, grid has {expected} dimensions"
            ),
            Self::ZeroPaths => write!(f, "run must advect at least one path"),
            Self::InvalidStepSize { value } => {
                write!(f, "step size must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from mapping coordinates or multi-indices to cells.
#[derive(Clone, Debug, PartialEq)]
pub enum LookupError {
    /// A coordinate's arity does not match the grid's dimensionality.
    DimensionMismatch {
        /// The grid's dimensionality.
        expected: usize,
        /// The coordinate's component count.
        got: usize,
    },
    /// A coordinate falls outside the simulation volume `[0, box_size)`,
    /// or is not a finite number.
    PositionOutOfBounds {
        /// The offending axis.
        axis: usize,
        /// The offending coordinate component.
        coordinate: f64,
        /// The per-axis extent of the volume.
        box_size: f64,
    },
    /// A multi-index component falls outside `[0, cells_per_dimension)`.
    IndexOutOfBounds {
        /// The offending axis.
        axis: usize,
        /// The offending index component.
        index: usize,
        /// Cells along each axis.
        cells_per_dimension: usize,
    },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, got } => {
                write!(f, "expected {expected} coordinate components, got {got}")
            }
            Self::PositionOutOfBounds {
                axis,
                coordinate,
                box_size,
            } => write!(
                f,
                "coordinate {coordinate} on axis {axis} outside [0, {box_size})"
            ),
            Self::IndexOutOfBounds {
                axis,
                index,
                cells_per_dimension,
            } => write!(
                f,
                "index {index} on axis {axis} outside [0, {cells_per_dimension})"
            ),
        }
    }
}

impl Error for LookupError {}

/// Errors from applying a field's assignment function over a grid.
///
/// Assignment is not transactional: cells visited before the failing one
/// keep their newly assigned values.
#[derive(Clone, Debug, PartialEq)]
pub enum AssignError {
    /// The field's assignment function reported a failure.
    AssignmentFailed {
        /// Name of the failing field.
        field: String,
        /// Index of the cell being assigned when the failure occurred.
        index: MultiIndex,
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The assignment function returned a value with a NaN or infinite
    /// component (sentinel checking).
    NonFiniteValue {
        /// Name of the failing field.
        field: String,
        /// Index of the cell that received the non-finite value.
        index: MultiIndex,
    },
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssignmentFailed {
                field,
                index,
                reason,
            } => write!(f, "field '{field}' failed at cell {index:?}: {reason}"),
            Self::NonFiniteValue { field, index } => {
                write!(f, "field '{field}' produced a non-finite value at cell {index:?}")
            }
        }
    }
}

impl Error for AssignError {}

/// Errors from the advection loop.
///
/// The loop is fail-fast: the first failing path aborts the whole call,
/// and partially advected paths retain the history and position they had
/// accumulated before the failing step.
#[derive(Clone, Debug, PartialEq)]
pub enum AdvectError {
    /// The per-step displacement scale must be finite and positive.
    InvalidStepSize {
        /// The rejected value.
        value: f64,
    },
    /// A path's current position no longer resolves to any cell.
    PathOutOfBounds {
        /// Index of the path in seed order.
        path: usize,
        /// Zero-based step number at which the lookup failed.
        step: usize,
        /// The underlying lookup failure.
        source: LookupError,
    },
    /// The advecting field was never applied to the grid.
    FieldNotAssigned {
        /// Name of the missing field.
        field: String,
        /// Index of the path whose cell lacked the value.
        path: usize,
        /// Zero-based step number at which the read failed.
        step: usize,
    },
    /// The field value's arity does not match the grid's dimensionality,
    /// so it cannot displace a position.
    KickDimensionMismatch {
        /// Name of the offending field.
        field: String,
        /// The grid's dimensionality.
        expected: usize,
        /// The field value's component count.
        got: usize,
        /// Index of the path being advanced.
        path: usize,
        /// Zero-based step number at which the mismatch was found.
        step: usize,
    },
}

impl fmt::Display for AdvectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStepSize { value } => {
                write!(f, "step size must be finite and positive, got {value}")
            }
            Self::PathOutOfBounds { path, step, source } => {
                write!(f, "path {path} left the volume at step {step}: {source}")
            }
            Self::FieldNotAssigned { field, path, step } => write!(
                f,
                "field '{field}' not assigned to the cell under path {path} at step {step}"
            ),
            Self::KickDimensionMismatch {
                field,
                expected,
                got,
                path,
                step,
            } => write!(
                f,
                "field '{field}' kicked path {path} at step {step} with {got} components, \
                 grid has {expected} dimensions"
            ),
        }
    }
}

impl Error for AdvectError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PathOutOfBounds { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn advect_error_exposes_lookup_source() {
        let err = AdvectError::PathOutOfBounds {
            path: 3,
            step: 7,
            source: LookupError::PositionOutOfBounds {
                axis: 1,
                coordinate: -0.25,
                box_size: 4.0,
            },
        };
        let source = err.source().expect("lookup source");
        assert!(source.to_string().contains("axis 1"));
    }

    #[test]
    fn display_names_path_and_step() {
        let err = AdvectError::FieldNotAssigned {
            field: "current".into(),
            path: 0,
            step: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("current"));
        assert!(msg.contains("path 0"));
        assert!(msg.contains("step 2"));
    }

    #[test]
    fn assign_error_names_field_and_cell() {
        let err = AssignError::AssignmentFailed {
            field: "current".into(),
            index: smallvec![1, 0],
            reason: "velocity has 3 components".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'current'"));
        assert!(msg.contains("[1, 0]"));
    }
}

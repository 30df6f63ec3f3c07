//! The Adrift simulation core: grids of cells, named fields, and tracer
//! path advection.
//!
//! A [`Grid`] discretizes an N-dimensional cube of side `box_size` into
//! `cells_per_dimension^dimensions` equal [`Cell`]s, each holding an
//! open-ended mapping from field name to assigned value. A [`Field`] pairs
//! a name with the pure function that computes its value for any cell.
//! [`Path`]s are tracer particles carried through the volume: each
//! advection step reads the field value of the cell containing the path
//! and displaces the path by `step_size * value`, archiving the trajectory.
//!
//! # Determinism
//!
//! All cell enumeration follows the canonical row-major order produced by
//! [`MultiIndexIter`] (last axis fastest), so two grids built with the same
//! parameters are identical, and advection over deterministic fields is
//! reproducible run to run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod config;
pub mod field;
pub mod grid;
pub mod odometer;
pub mod path;

pub use cell::Cell;
pub use config::RunConfig;
pub use field::Field;
pub use grid::Grid;
pub use odometer::MultiIndexIter;
pub use path::Path;

//! Adrift: tracer-path advection over regular N-dimensional grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Adrift sub-crates. For most users, adding `adrift` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use adrift::prelude::*;
//!
//! // An 8x8 grid over a 16-unit box, three tracers seeded at the center.
//! let config = RunConfig {
//!     dimensions: 2,
//!     cells_per_dimension: 8,
//!     box_size: 16.0,
//!     path_count: 3,
//!     step_count: 20,
//!     step_size: 0.25,
//! };
//! let mut grid = config.build_grid().unwrap();
//!
//! // A gentle eastward drift in every cell.
//! let flow = UniformFlow::named("drift", &[1.0, 0.0]).into_field();
//! grid.apply_field(&flow).unwrap();
//!
//! // Carry the tracers and read back their trajectories.
//! grid.advect(&flow, config.step_count, config.step_size).unwrap();
//! for path in grid.paths() {
//!     assert_eq!(path.current_position(), &[13.0, 8.0]);
//!     assert_eq!(path.history().len(), 20);
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `adrift-core` | Index/position types, field values, error enums |
//! | [`grid`] | `adrift-grid` | Grid, cells, fields, paths, advection, run config |
//! | [`fields`] | `adrift-fields` | Reference fields (uniform flow, random current) |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`adrift-core`).
pub use adrift_core as types;

/// Reference fields (`adrift-fields`).
pub use adrift_fields as fields;

/// The simulation core (`adrift-grid`).
pub use adrift_grid as grid;

/// The most commonly used types, re-exported flat.
pub mod prelude {
    pub use adrift_core::{
        AdvectError, AssignError, ConfigError, FieldValue, LookupError, MultiIndex, Position,
    };
    pub use adrift_fields::{RandomCurrent, UniformFlow};
    pub use adrift_grid::{Cell, Field, Grid, MultiIndexIter, Path, RunConfig};
}

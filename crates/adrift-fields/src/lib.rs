//! Reference fields for the Adrift advection simulator.
//!
//! The simulation core has no built-in fields; this crate provides the
//! two used throughout the tests and demos:
//!
//! - [`UniformFlow`]: the same velocity vector in every cell.
//! - [`RandomCurrent`]: an independent random velocity per cell, the
//!   classic "patch of ocean" test field. Deterministic under a fixed
//!   seed.
//!
//! Both are plain configuration structs converted into a
//! [`Field`](adrift_grid::Field) with `into_field()`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod current;
pub mod uniform;

pub use current::{RandomCurrent, RandomCurrentBuilder};
pub use uniform::UniformFlow;

//! Core types and errors for the Adrift advection simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental vocabulary shared by the rest of the workspace: multi-index
//! and position types, the tagged per-cell [`FieldValue`], and the error
//! enums surfaced by grid construction, field assignment, spatial lookup,
//! and advection.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod index;
pub mod value;

pub use error::{AdvectError, AssignError, ConfigError, LookupError};
pub use index::{MultiIndex, Position};
pub use value::FieldValue;

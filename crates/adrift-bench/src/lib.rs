//! Benchmark profiles for the Adrift advection simulator.
//!
//! Provides pre-built [`RunConfig`] profiles shared by the benches:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells), 16 paths
//! - [`stress_profile`]: 316x316 grid (~100K cells), 256 paths

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use adrift_grid::RunConfig;

/// Build a reference benchmark profile: 100x100 grid (10K cells).
///
/// Step size is small relative to the cell width so paths stay inside
/// the volume for the whole benchmarked run.
pub fn reference_profile() -> RunConfig {
    RunConfig {
        dimensions: 2,
        cells_per_dimension: 100,
        box_size: 100.0,
        path_count: 16,
        step_count: 1_000,
        step_size: 0.01,
    }
}

/// Build a stress benchmark profile: 316x316 grid (~100K cells).
pub fn stress_profile() -> RunConfig {
    RunConfig {
        dimensions: 2,
        cells_per_dimension: 316,
        box_size: 316.0,
        path_count: 256,
        step_count: 1_000,
        step_size: 0.01,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        reference_profile().validate().unwrap();
    }

    #[test]
    fn stress_profile_validates() {
        stress_profile().validate().unwrap();
    }
}

//! Multi-index and position types.

use smallvec::SmallVec;

/// An N-component cell index into a grid's index space.
///
/// Component `d` ranges over `[0, cells_per_dimension)` along axis `d`.
/// Inline storage covers up to four dimensions without heap allocation,
/// which is every grid this simulator is realistically run on; higher
/// dimensionalities spill to the heap transparently.
pub type MultiIndex = SmallVec<[usize; 4]>;

/// An N-component real-valued coordinate in the simulation volume.
///
/// Shares the inline-capacity choice of [`MultiIndex`] so positions and
/// indices of the same grid have the same allocation behavior.
pub type Position = SmallVec<[f64; 4]>;

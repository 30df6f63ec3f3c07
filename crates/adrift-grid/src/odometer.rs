//! Row-major enumeration of an N-dimensional index space.

use adrift_core::MultiIndex;
use smallvec::smallvec;

/// Odometer-style iterator over the canonical row-major index sequence.
///
/// Yields every N-component multi-index with components in
/// `[0, cells_per_dimension)`, last axis varying fastest:
/// `[0,0], [0,1], ..., [0,c-1], [1,0], ...` for two dimensions. This is
/// the single enumeration order used for cell storage, field assignment,
/// and every other whole-grid sweep, so two sweeps over the same shape
/// always visit cells in the same sequence.
#[derive(Clone, Debug)]
pub struct MultiIndexIter {
    dimensions: usize,
    cells_per_dimension: usize,
    next: Option<MultiIndex>,
}

impl MultiIndexIter {
    /// Enumerate the index space of the given shape from the start.
    ///
    /// A shape with zero dimensions or zero cells per dimension yields
    /// nothing.
    pub fn new(dimensions: usize, cells_per_dimension: usize) -> Self {
        let next = if dimensions == 0 || cells_per_dimension == 0 {
            None
        } else {
            Some(smallvec![0; dimensions])
        };
        Self {
            dimensions,
            cells_per_dimension,
            next,
        }
    }

    /// Rewind to the first index of the sequence.
    pub fn restart(&mut self) {
        *self = Self::new(self.dimensions, self.cells_per_dimension);
    }
}

impl Iterator for MultiIndexIter {
    type Item = MultiIndex;

    fn next(&mut self) -> Option<MultiIndex> {
        let current = self.next.take()?;
        let mut succ = current.clone();
        for axis in (0..self.dimensions).rev() {
            succ[axis] += 1;
            if succ[axis] < self.cells_per_dimension {
                self.next = Some(succ);
                return Some(current);
            }
            succ[axis] = 0;
        }
        // Every axis carried: `current` was the last index.
        Some(current)
    }
}

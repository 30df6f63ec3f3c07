//! A single addressable region of the simulation volume.

use adrift_core::{FieldValue, Position};
use indexmap::IndexMap;

/// One cell of a grid: a fixed-size region with a stored center location
/// and an open-ended set of named field values.
///
/// Cells are created by grid construction and never move or resize;
/// assignment passes populate the value mapping in place. The mapping
/// preserves insertion order, so iterating a cell's values is as
/// deterministic as the assignment passes that filled it.
#[derive(Clone, Debug)]
pub struct Cell {
    location: Position,
    width: f64,
    values: IndexMap<String, FieldValue>,
}

impl Cell {
    pub(crate) fn new(location: Position, width: f64) -> Self {
        Self {
            location,
            width,
            values: IndexMap::new(),
        }
    }

    /// The cell's geometric center, one coordinate per grid axis.
    pub fn location(&self) -> &[f64] {
        &self.location
    }

    /// The cell's width, identical along every axis and for every cell of
    /// the owning grid.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Look up the value assigned under a field name, if any.
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// All values assigned to this cell, in assignment order.
    pub fn values(&self) -> &IndexMap<String, FieldValue> {
        &self.values
    }

    /// Store a value under a field name, replacing any previous entry.
    pub(crate) fn set_value(&mut self, name: &str, value: FieldValue) {
        self.values.insert(name.to_owned(), value);
    }
}

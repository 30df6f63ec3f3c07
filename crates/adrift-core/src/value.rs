//! The tagged per-cell field value.

use smallvec::SmallVec;

/// A value assigned to one cell by one field.
///
/// Cells store an open-ended mapping from field name to `FieldValue`, so
/// new named fields can be added to a grid without changing the cell type.
/// The tag distinguishes the two shapes the simulator works with: a single
/// scalar quantity, or a fixed-size vector such as a velocity.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// A single floating-point quantity.
    Scalar(f64),
    /// A fixed-size vector of floating-point components.
    Vector(SmallVec<[f64; 4]>),
}

impl FieldValue {
    /// Build a vector value from a component slice.
    pub fn vector(components: &[f64]) -> Self {
        Self::Vector(SmallVec::from_slice(components))
    }

    /// View the value uniformly as a component slice.
    ///
    /// A scalar exposes exactly one component, which is what lets a scalar
    /// field kick paths on a one-dimensional grid.
    pub fn components(&self) -> &[f64] {
        match self {
            Self::Scalar(v) => std::slice::from_ref(v),
            Self::Vector(v) => v,
        }
    }

    /// Number of components carried by this value.
    pub fn dimensions(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Vector(v) => v.len(),
        }
    }

    /// `true` if every component is finite (no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        self.components().iter().all(|c| c.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn scalar_exposes_one_component() {
        let v = FieldValue::Scalar(2.5);
        assert_eq!(v.components(), &[2.5]);
        assert_eq!(v.dimensions(), 1);
    }

    #[test]
    fn vector_exposes_all_components() {
        let v = FieldValue::vector(&[1.0, -2.0, 0.5]);
        assert_eq!(v.components(), &[1.0, -2.0, 0.5]);
        assert_eq!(v.dimensions(), 3);
    }

    #[test]
    fn vector_constructor_matches_literal() {
        let v = FieldValue::vector(&[1.0, 0.0]);
        assert_eq!(v, FieldValue::Vector(smallvec![1.0, 0.0]));
    }

    #[test]
    fn finiteness_detects_nan_and_infinity() {
        assert!(FieldValue::Scalar(0.0).is_finite());
        assert!(FieldValue::vector(&[1.0, -1.0]).is_finite());
        assert!(!FieldValue::Scalar(f64::NAN).is_finite());
        assert!(!FieldValue::vector(&[1.0, f64::INFINITY]).is_finite());
    }
}

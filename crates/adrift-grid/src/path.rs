//! Tracer path state: current position, archived trajectory, and
//! path-integrated accumulators.

use adrift_core::Position;
use indexmap::IndexMap;

/// A single tracer's trajectory through the simulation volume.
///
/// A path remembers where it started, where its tip currently is, the
/// step size of its most recent advection run, and every position the tip
/// has previously occupied (chronological, append-only). The accumulator
/// is an open-ended mapping for quantities integrated along the
/// trajectory; the advection loop itself leaves it untouched.
#[derive(Clone, Debug)]
pub struct Path {
    starting_point: Position,
    current_position: Position,
    step_size: Option<f64>,
    history: Vec<Position>,
    accumulator: IndexMap<String, f64>,
}

impl Path {
    pub(crate) fn new(starting_point: Position) -> Self {
        let current_position = starting_point.clone();
        Self {
            starting_point,
            current_position,
            step_size: None,
            history: Vec::new(),
            accumulator: IndexMap::new(),
        }
    }

    /// The coordinates this path was seeded at.
    pub fn starting_point(&self) -> &[f64] {
        &self.starting_point
    }

    /// The current position of the path's tip.
    ///
    /// May lie outside the simulation volume after the final step of a
    /// run; the excursion is only detected (and reported as an error) by
    /// the next lookup that touches it.
    pub fn current_position(&self) -> &[f64] {
        &self.current_position
    }

    /// Step size of the most recent advection run, if any has happened.
    pub fn step_size(&self) -> Option<f64> {
        self.step_size
    }

    /// Every previously occupied position, oldest first.
    ///
    /// The current position is appended here immediately before each
    /// displacement, so after `k` steps the history holds `k` entries and
    /// `history[0]` is the starting point.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Quantities accumulated along this trajectory, by name.
    pub fn accumulator(&self) -> &IndexMap<String, f64> {
        &self.accumulator
    }

    /// Fold a scalar contribution into a named accumulated quantity.
    ///
    /// Absent names start from zero.
    pub fn accumulate(&mut self, name: &str, delta: f64) {
        *self.accumulator.entry(name.to_owned()).or_insert(0.0) += delta;
    }

    /// Record the step size of the advection run currently driving this
    /// path.
    pub(crate) fn set_step_size(&mut self, step_size: f64) {
        self.step_size = Some(step_size);
    }

    /// Archive the current position and displace the tip by
    /// `step_size * kick`, component-wise.
    ///
    /// The caller guarantees `kick` has the same arity as the position.
    pub(crate) fn advance(&mut self, kick: &[f64], step_size: f64) {
        self.history.push(self.current_position.clone());
        for (coordinate, component) in self.current_position.iter_mut().zip(kick) {
            *coordinate += step_size * component;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn new_path_sits_at_its_starting_point_with_empty_history() {
        let path = Path::new(smallvec![2.0, 2.0]);
        assert_eq!(path.current_position(), path.starting_point());
        assert!(path.history().is_empty());
        assert_eq!(path.step_size(), None);
    }

    #[test]
    fn advance_archives_before_displacing() {
        let mut path = Path::new(smallvec![1.0, 1.0]);
        path.set_step_size(0.5);
        path.advance(&[1.0, 0.0], 0.5);
        assert_eq!(path.current_position(), &[1.5, 1.0]);
        assert_eq!(path.history().len(), 1);
        assert_eq!(path.history()[0].as_slice(), &[1.0, 1.0]);
        assert_eq!(path.step_size(), Some(0.5));
    }

    #[test]
    fn history_grows_by_one_per_advance() {
        let mut path = Path::new(smallvec![0.0]);
        for _ in 0..3 {
            path.advance(&[1.0], 1.0);
        }
        assert_eq!(path.history().len(), 3);
        assert_eq!(path.current_position(), &[3.0]);
    }

    #[test]
    fn accumulate_folds_from_zero() {
        let mut path = Path::new(smallvec![0.0, 0.0]);
        path.accumulate("arc_length", 0.5);
        path.accumulate("arc_length", 0.25);
        assert_eq!(path.accumulator().get("arc_length"), Some(&0.75));
    }
}

//! End-to-end advection runs over the reference fields.

use adrift_fields::{RandomCurrent, UniformFlow};
use adrift_grid::Grid;
use smallvec::smallvec;

#[test]
fn a_uniform_flow_drifts_a_path_in_a_straight_line() {
    let flow = UniformFlow::named("current", &[1.0, 0.0]).into_field();
    let mut grid = Grid::new(2, 2, 4.0).unwrap();
    grid.apply_field(&flow).unwrap();
    grid.seed_paths(&[smallvec![1.0, 1.0]]).unwrap();

    grid.advect(&flow, 3, 0.5).unwrap();

    let path = &grid.paths()[0];
    assert_eq!(path.current_position(), &[2.5, 1.0]);
    assert_eq!(path.step_size(), Some(0.5));

    let history: Vec<&[f64]> = path.history().iter().map(|p| p.as_slice()).collect();
    assert_eq!(
        history,
        vec![&[1.0, 1.0][..], &[1.5, 1.0][..], &[2.0, 1.0][..]]
    );
}

#[test]
fn seeded_random_currents_reproduce_whole_trajectories() {
    let run = |seed: u64| {
        let field = RandomCurrent::builder()
            .seed(seed)
            .sigma(0.2)
            .build()
            .unwrap()
            .into_field();
        let mut grid = Grid::new(2, 4, 8.0).unwrap();
        grid.apply_field(&field).unwrap();
        grid.seed_paths(&[smallvec![4.0, 4.0], smallvec![2.0, 6.0]])
            .unwrap();
        grid.advect(&field, 10, 0.5).unwrap();
        grid.paths()
            .iter()
            .map(|p| (p.current_position().to_vec(), p.history().to_vec()))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(11), run(11));
    assert_ne!(run(11), run(12));
}

#[test]
fn accumulating_along_an_advected_trajectory() {
    // A consumer folding per-step arc length into the accumulator after
    // the run, from the recorded history.
    let flow = UniformFlow::named("current", &[0.6, 0.8]).into_field();
    let mut grid = Grid::new(2, 2, 4.0).unwrap();
    grid.apply_field(&flow).unwrap();
    grid.seed_paths(&[smallvec![1.0, 1.0]]).unwrap();
    grid.advect(&flow, 4, 0.5).unwrap();

    let steps: Vec<f64> = {
        let path = &grid.paths()[0];
        let mut stations: Vec<Vec<f64>> = path.history().iter().map(|p| p.to_vec()).collect();
        stations.push(path.current_position().to_vec());
        stations
            .windows(2)
            .map(|pair| {
                pair[0]
                    .iter()
                    .zip(&pair[1])
                    .map(|(a, b)| (b - a) * (b - a))
                    .sum::<f64>()
                    .sqrt()
            })
            .collect()
    };
    let path = &mut grid.paths_mut()[0];
    for length in steps {
        path.accumulate("arc_length", length);
    }

    // Four steps of 0.5 along a unit vector: total arc length 2.
    let total = *path.accumulator().get("arc_length").unwrap();
    assert!((total - 2.0).abs() < 1e-12);
}

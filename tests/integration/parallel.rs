//! Parallel evaluation across independent model instances

use dsge_core::parallel::{evaluate_draws, steady_state_matrix};
use dsge_core::SteadyState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::test_helpers::model_with_sectors;

#[test]
fn test_parallel_matches_sequential() {
    let model = model_with_sectors(2);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let draws: Vec<Vec<f64>> = (0..16)
        .map(|_| model.draw_from_prior(&mut rng).unwrap())
        .collect();

    let parallel = evaluate_draws(&model, &draws);
    assert_eq!(parallel.len(), draws.len());

    for (draw, result) in draws.iter().zip(&parallel) {
        match (model.evaluate(draw), result) {
            (Ok(a), Ok(b)) => assert_eq!(&a, b),
            (Err(_), Err(_)) => {}
            (a, b) => panic!("sequential {:?} vs parallel {:?}", a, b),
        }
    }

    // The template model is untouched
    assert_eq!(
        model.parameters().free_values(),
        model_with_sectors(2).parameters().free_values()
    );
}

#[test]
fn test_matrix_of_successes() {
    let model = model_with_sectors(1);
    let base = model.parameters().free_values();
    let draws = vec![base.clone(), base.clone(), base];

    let states: Vec<SteadyState> = evaluate_draws(&model, &draws)
        .into_iter()
        .filter_map(Result::ok)
        .collect();
    let matrix = steady_state_matrix(&states);

    assert_eq!(matrix.nrows(), 3);
    assert_eq!(matrix.ncols(), SteadyState::KEYS.len());
    for row in matrix.rows() {
        assert_eq!(row, matrix.row(0));
    }
}

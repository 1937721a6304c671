//! Parallel evaluation of parameter draws
//!
//! Each draw is solved on its own clone of the model, so evaluations never
//! observe each other's parameter values. Results come back in input order
//! and match a sequential loop over [`Model::evaluate`].

use ndarray::Array2;
use rayon::prelude::*;

use crate::error::Result;
use crate::model::Model;
use crate::steady_state::SteadyState;

/// Solve the steady state for every draw in parallel
///
/// A rejected draw yields an `Err` in its slot and does not affect the others.
///
/// # Examples
///
/// ```
/// use dsge_core::parallel::evaluate_draws;
/// use dsge_core::settings::ModelConfig;
/// use dsge_core::Model;
///
/// let model = Model::new(ModelConfig::default()).unwrap();
/// let draws = vec![model.parameters().free_values(); 4];
/// let results = evaluate_draws(&model, &draws);
/// assert!(results.iter().all(|r| r.is_ok()));
/// ```
pub fn evaluate_draws(model: &Model, draws: &[Vec<f64>]) -> Vec<Result<SteadyState>> {
    draws.par_iter().map(|values| model.evaluate(values)).collect()
}

/// Stack steady states into a matrix, one row per state in
/// [`SteadyState::KEYS`] column order
pub fn steady_state_matrix(states: &[SteadyState]) -> Array2<f64> {
    let mut matrix = Array2::zeros((states.len(), SteadyState::KEYS.len()));
    for (mut row, state) in matrix.rows_mut().into_iter().zip(states) {
        row.assign(&state.to_array());
    }
    matrix
}

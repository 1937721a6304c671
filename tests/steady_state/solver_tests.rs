//! Tests for the steady-state pipeline

use approx::assert_relative_eq;
use dsge_core::models::financial_frictions;
use dsge_core::parameters::ParameterSet;
use dsge_core::steady_state::frictions::{norm_cdf, norm_quantile, zeta_spb};
use dsge_core::steady_state::{solve, SolverOptions, SteadyState};

fn baseline() -> ParameterSet {
    financial_frictions::parameters().unwrap()
}

#[test]
fn test_solver_does_not_write_parameters() {
    let params = baseline();
    let before = params.clone();
    solve(&params, &SolverOptions::default()).unwrap();
    assert_eq!(params.free_values(), before.free_values());
    assert!(params.value_of("rstar").unwrap().is_nan());
}

#[test]
fn test_repeated_solves_bit_identical() {
    let params = baseline();
    let options = SolverOptions::default();
    let first = solve(&params, &options).unwrap().to_array();
    for _ in 0..50 {
        let again = solve(&params, &options).unwrap().to_array();
        assert!(first
            .iter()
            .zip(again.iter())
            .all(|(a, b)| a.to_bits() == b.to_bits()));
    }
}

#[test]
fn test_threshold_quantile_matches_failure_probability() {
    let params = baseline();
    let ss = solve(&params, &SolverOptions::default()).unwrap();
    let f_omega = params.value_of("Fω").unwrap();
    assert_relative_eq!(norm_cdf(ss.z_omega_star), f_omega, epsilon = 1e-12);
    assert_relative_eq!(ss.z_omega_star, norm_quantile(f_omega));
}

#[test]
fn test_root_reproduces_target_elasticity() {
    let mut params = baseline();
    for target in [0.04, 0.0559, 0.07] {
        params.set_value("ζ_spb", target).unwrap();
        let ss = solve(&params, &SolverOptions::default()).unwrap();
        assert!(!ss.used_fallback, "fallback at ζ_spb = {}", target);
        let spr = params.value_of("spr").unwrap();
        assert_relative_eq!(zeta_spb(ss.z_omega_star, ss.sigma_omega_star, spr), target, epsilon = 1e-9);
    }
}

#[test]
fn test_singular_spread_falls_back() {
    let mut params = baseline();
    params.set_value("spr", 0.0).unwrap();
    let ss = solve(&params, &SolverOptions::default()).unwrap();
    assert!(ss.used_fallback);
    assert_eq!(ss.sigma_omega_star, 0.5);
    for (key, value) in ss.entries() {
        assert!(value.is_finite(), "{} = {}", key, value);
    }
}

#[test]
fn test_baseline_elasticities() {
    let ss = solve(&baseline(), &SolverOptions::default()).unwrap();
    assert_relative_eq!(ss.zeta_sp_sigma_omega, 0.02692, epsilon = 1e-4);
    assert_relative_eq!(ss.zeta_sp_mu_e, 0.004263, epsilon = 1e-5);
    assert_relative_eq!(ss.zeta_n_rk, 1.352, epsilon = 1e-3);
    assert_relative_eq!(ss.zeta_n_r, 0.356, epsilon = 1e-3);
    assert_relative_eq!(ss.zeta_n_n, 0.9969, epsilon = 1e-3);
    assert!(ss.zeta_n_mu_e > 0.0 && ss.zeta_n_sigma_omega > 0.0);
}

#[test]
fn test_serialization() {
    let ss = solve(&baseline(), &SolverOptions::default()).unwrap();
    let json = serde_json::to_string(&ss).unwrap();
    let back: SteadyState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ss);
    for ((key, before), (_, after)) in ss.entries().iter().zip(back.entries().iter()) {
        assert_eq!(before.to_bits(), after.to_bits(), "{}", key);
    }

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    for key in SteadyState::KEYS {
        assert!(value.get(key).is_some(), "missing {}", key);
    }
    assert_eq!(ss.get("Rstarn"), Some(ss.rstarn));
    assert_eq!(ss.get("nope"), None);
}

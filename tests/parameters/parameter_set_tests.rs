//! Integration tests for the ParameterSet collection

use std::env;
use std::fs;

use dsge_core::models::financial_frictions;
use dsge_core::parameters::{Parameter, ParameterLike, ParameterSet, Transform};
use dsge_core::ModelError;

use crate::test_helpers::{approx_eq, bounded};

#[test]
fn test_keys_unique_across_kinds() {
    let mut params = financial_frictions::parameters().unwrap();
    let before = params.len();

    let err = params
        .add_parameter(Parameter::steady_state("α", "", ""))
        .unwrap_err();
    assert!(matches!(err, ModelError::DuplicateKey(ref k) if k == "α"));

    let err = params
        .add_parameter(bounded("rstar", 0.5, 0.0, 1.0, Transform::SquareRoot))
        .unwrap_err();
    assert!(matches!(err, ModelError::DuplicateKey(_)));

    assert_eq!(params.len(), before);
}

#[test]
fn test_bulk_update_order_and_atomicity() {
    let mut params = ParameterSet::new();
    params.add_parameter(bounded("a", 0.1, 0.0, 1.0, Transform::SquareRoot)).unwrap();
    params
        .add_parameter(Parameter::steady_state("ss", "", ""))
        .unwrap();
    params.add_parameter(bounded("b", 0.2, 0.0, 1.0, Transform::Untransformed)).unwrap();
    params.add_parameter(bounded("c", 5.0, 1.0, 10.0, Transform::Exponential)).unwrap();

    assert_eq!(params.free_keys(), vec!["a", "b", "c"]);

    // Last element invalid: nothing is applied
    let err = params.update(&[0.3, 0.4, 11.0]).unwrap_err();
    assert!(matches!(err, ModelError::OutOfBounds { ref key, .. } if key == "c"));
    assert_eq!(params.free_values(), vec![0.1, 0.2, 5.0]);

    params.update(&[0.3, 0.4, 6.0]).unwrap();
    assert_eq!(params.value_of("a").unwrap(), 0.3);
    assert_eq!(params.value_of("b").unwrap(), 0.4);
    assert_eq!(params.value_of("c").unwrap(), 6.0);
}

#[test]
fn test_real_line_round_trip_baseline() {
    let mut params = financial_frictions::parameters().unwrap();
    let before = params.free_values();

    for _ in 0..100 {
        let xs = params.to_real_line().unwrap();
        params.update_from_real_line(&xs).unwrap();
    }

    for (a, b) in params.free_values().iter().zip(&before) {
        assert!(approx_eq(*a, *b, 1e-9), "{} drifted to {}", b, a);
    }
}

#[test]
fn test_real_line_dimension_mismatch() {
    let mut params = financial_frictions::parameters().unwrap();
    let err = params.update_from_real_line(&[0.0; 3]).unwrap_err();
    assert!(matches!(err, ModelError::DimensionMismatch { actual: 3, .. }));
}

#[test]
fn test_log_prior_uniform() {
    let mut params = ParameterSet::new();
    params.add_parameter(bounded("a", 0.5, 0.0, 1.0, Transform::SquareRoot)).unwrap();
    let inside = params.log_prior().unwrap();
    assert!(approx_eq(inside, 0.0, 1e-12));
}

#[test]
fn test_json_file_round_trip() {
    let params = financial_frictions::parameters().unwrap();
    let path = env::temp_dir().join(format!("dsge_core_params_{}.json", std::process::id()));

    params.save_json(&path).unwrap();
    let loaded = ParameterSet::load_json(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(loaded.len(), params.len());
    assert_eq!(loaded.free_keys(), params.free_keys());
    assert_eq!(loaded.free_values(), params.free_values());
    for p in params.iter() {
        let q = loaded.get(p.key()).unwrap();
        assert_eq!(q.scaling(), p.scaling());
        assert_eq!(q.transform(), p.transform());
        assert_eq!(q.description(), p.description());
    }
    // Steady-state values are not persisted
    assert!(loaded.value_of("rstar").unwrap().is_nan());
}

#[test]
fn test_json_rejects_out_of_bounds_value() {
    let params = financial_frictions::parameters().unwrap();
    let json = params.to_json().unwrap();
    let tampered = json.replacen("\"value\": 0.1596", "\"value\": 1.5", 1);
    assert_ne!(json, tampered);
    assert!(ParameterSet::from_json(&tampered).is_err());
}

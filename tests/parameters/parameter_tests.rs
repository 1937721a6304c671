//! Integration tests for the Parameter sum type

use approx::assert_relative_eq;
use dsge_core::parameters::{Interval, Parameter, ParameterLike, Prior, Scaling, Transform};
use dsge_core::ModelError;

use crate::test_helpers::bounded;

#[test]
fn test_parameter_lifecycle() {
    let mut param = bounded("h", 0.5347, 1e-5, 0.999, Transform::SquareRoot);

    assert_eq!(param.key(), "h");
    assert_eq!(param.value(), 0.5347);
    assert!(!param.is_fixed());
    assert!(!param.is_steady_state());
    assert_eq!(param.scaling(), None);

    param.set_value(0.7).unwrap();
    assert_eq!(param.value(), 0.7);

    // Rejected values leave the parameter untouched
    assert!(matches!(param.set_value(-0.1), Err(ModelError::OutOfBounds { .. })));
    assert!(matches!(param.set_value(f64::NAN), Err(ModelError::InvalidInput(_))));
    assert_eq!(param.value(), 0.7);
}

#[test]
fn test_scaled_value_never_stale() {
    let mut spr = Parameter::builder("spr", 1.7444)
        .bounds(Interval::new(0.0, 100.0).unwrap())
        .transform(Transform::Exponential, Interval::new(0.0, 100.0).unwrap())
        .prior(Prior::Gamma { mean: 2.0, std: 0.1 })
        .scaling(Scaling::QuarterlyGross)
        .build()
        .unwrap();

    for v in [0.0, 1.0, 1.7444, 4.0] {
        spr.set_value(v).unwrap();
        assert_relative_eq!(spr.scaled_value(), (1.0 + v / 100.0).powf(0.25));
    }
}

#[test]
fn test_fixed_violation() {
    let mut delta = Parameter::builder("δ", 0.025)
        .bounds(Interval::new(0.0, 1.0).unwrap())
        .fixed()
        .build()
        .unwrap();

    for v in [0.0, 0.03, 0.5] {
        let err = delta.set_value(v).unwrap_err();
        assert!(matches!(err, ModelError::FixedParameterViolation { ref key } if key == "δ"));
        assert_eq!(delta.value(), 0.025);
    }

    delta.override_value(0.03).unwrap();
    assert_eq!(delta.value(), 0.03);
}

#[test]
fn test_independent_transform_interval() {
    // The transform interval need not match the value bounds.
    let param = Parameter::builder("ρ", 0.7)
        .bounds(Interval::new(0.0, 1.0).unwrap())
        .transform(Transform::SquareRoot, Interval::new(-1.0, 1.0).unwrap())
        .prior(Prior::Beta { mean: 0.75, std: 0.1 })
        .build()
        .unwrap();
    assert_eq!(param.transform_parameterization(), Some(Interval::new(-1.0, 1.0).unwrap()));

    let x = param.to_real_line().unwrap();
    assert_relative_eq!(x, 0.7 / (1.0f64 - 0.49).sqrt(), epsilon = 1e-12);
    assert_relative_eq!(param.from_real_line(x).unwrap(), 0.7, epsilon = 1e-12);
}

#[test]
fn test_steady_state_kind() {
    let mut param = Parameter::steady_state("nstar", "Steady-state net worth", "n_*");
    assert!(param.value().is_nan());
    assert_eq!(param.description(), "Steady-state net worth");
    assert_eq!(param.tex_label(), "n_*");
    assert!(param.set_value(1.0).is_err());
    assert!(param.override_value(1.0).is_err());
    assert!(param.prior().is_none());
    assert!(param.valuebounds().is_none());
}

#[test]
fn test_invalid_definitions() {
    let err = Parameter::builder("", 0.5)
        .prior(Prior::Normal { mean: 0.0, std: 1.0 })
        .build()
        .unwrap_err();
    assert!(matches!(err, ModelError::InvalidDefinition(_)));

    // A bounded transform needs a finite auxiliary interval
    let err = Parameter::builder("x", 0.5)
        .transform(Transform::SquareRoot, Interval::unbounded())
        .prior(Prior::Normal { mean: 0.0, std: 1.0 })
        .build()
        .unwrap_err();
    assert!(matches!(err, ModelError::InvalidDefinition(_)));

    let err = Parameter::builder("x", 0.5)
        .prior(Prior::Beta { mean: 0.5, std: 0.9 })
        .build()
        .unwrap_err();
    assert!(matches!(err, ModelError::InvalidDefinition(_)));
}

//! End-to-end scenarios on complete model instances

use approx::assert_relative_eq;
use dsge_core::indices::IndexCategory;
use dsge_core::settings::{ModelConfig, SettingValue};
use dsge_core::{Model, ModelError, SteadyState};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::test_helpers::model_with_sectors;

#[test]
fn test_baseline_scenario() {
    let mut model = model_with_sectors(1);

    // Baseline calibration
    for (key, value) in [
        ("α", 0.1596),
        ("ζ_p", 0.8940),
        ("δ", 0.025),
        ("ζ_spb", 0.0559),
        ("γ_star", 0.99),
        ("g_star", 0.18),
    ] {
        assert_eq!(model.value_of(key).unwrap(), value, "{}", key);
    }

    let ss = model.steady_state().unwrap();
    for (key, value) in [
        ("rstar", ss.rstar),
        ("r_k_star", ss.r_k_star),
        ("wstar", ss.wstar),
        ("kstar", ss.kstar),
        ("ystar", ss.ystar),
        ("cstar", ss.cstar),
        ("nstar", ss.nstar),
        ("vstar", ss.vstar),
    ] {
        assert!(value.is_finite() && value > 0.0, "{} = {}", key, value);
        assert_eq!(model.value_of(key).unwrap(), value);
    }

    let g_star = model.value_of("g_star").unwrap();
    assert_relative_eq!(ss.cstar + ss.istar, (1.0 - g_star) * ss.ystar, epsilon = 1e-12);
}

#[test]
fn test_sector_count_does_not_change_steady_state() {
    let one = model_with_sectors(1);
    let three = model_with_sectors(3);
    assert_eq!(three.n_sectors(), 3);

    for key in SteadyState::KEYS {
        assert_eq!(
            one.value_of(key).unwrap().to_bits(),
            three.value_of(key).unwrap().to_bits(),
            "{}",
            key
        );
    }
    assert!(three.index(IndexCategory::EndogenousStates, "y_3_t").is_ok());
    assert!(one.index(IndexCategory::EndogenousStates, "y_3_t").is_err());
}

#[test]
fn test_zero_sectors_rejected() {
    let config = ModelConfig {
        n_sectors: 0,
        ..ModelConfig::default()
    };
    assert!(matches!(Model::new(config), Err(ModelError::InvalidDimension(0))));
}

#[test]
fn test_failed_update_leaves_model_unchanged() {
    let mut model = model_with_sectors(1);
    let values = model.parameters().free_values();
    let snapshot = model.parameters().clone();

    let mut bad = values.clone();
    *bad.last_mut().unwrap() = -1.0;
    let err = model.update(&bad).unwrap_err();
    assert!(err.is_rejectable_draw());

    assert_eq!(model.parameters().free_values(), snapshot.free_values());
    for key in SteadyState::KEYS {
        assert_eq!(
            model.value_of(key).unwrap().to_bits(),
            snapshot.value_of(key).unwrap().to_bits()
        );
    }

    let err = model.update(&values[1..]).unwrap_err();
    assert!(matches!(err, ModelError::DimensionMismatch { .. }));
}

#[test]
fn test_fixed_parameters_excluded_from_updates() {
    let mut model = model_with_sectors(1);
    let keys = model.parameters().free_keys();
    for fixed in ["δ", "Fω", "γ_star", "g_star", "π_star"] {
        assert!(!keys.contains(&fixed), "{}", fixed);
    }
    // Only the override path moves a fixed parameter, and the model does not expose it.
    let mut params = model.parameters().clone();
    assert!(matches!(
        params.set_value("g_star", 0.2),
        Err(ModelError::FixedParameterViolation { .. })
    ));
    model.steady_state().unwrap();
}

#[test]
fn test_real_line_update() {
    let mut model = model_with_sectors(1);
    let mut xs = model.parameters().to_real_line().unwrap();
    let h = model.parameters().free_keys().iter().position(|k| *k == "h").unwrap();
    xs[h] += 0.25;

    let before = model.value_of("h").unwrap();
    model.update_from_real_line(&xs).unwrap();
    assert!(model.value_of("h").unwrap() > before);

    // Any finite real-line point maps inside the bounds
    let wild: Vec<f64> = xs.iter().map(|x| x * 1e6).collect();
    let values = model.parameters().real_line_to_model(&wild).unwrap();
    for (p, v) in model.parameters().free().zip(values) {
        assert!(p.valuebounds().unwrap().contains(v));
    }
}

#[test]
fn test_alternative_subspec() {
    let config = ModelConfig {
        subspec: "ss1".to_string(),
        ..ModelConfig::default()
    };
    let alt = Model::new(config).unwrap();
    let base = model_with_sectors(1);

    assert_eq!(alt.subspec(), "ss1");
    assert_eq!(alt.value_of("g_star").unwrap(), 0.20);
    assert!(alt.value_of("cstar").unwrap() < base.value_of("cstar").unwrap());
    assert_ne!(alt.value_of("zω_star").unwrap(), base.value_of("zω_star").unwrap());

    let config = ModelConfig {
        subspec: "ss42".to_string(),
        ..ModelConfig::default()
    };
    assert!(matches!(Model::new(config), Err(ModelError::UnknownSubspec(_))));
}

#[test]
fn test_settings_overrides() {
    let config = ModelConfig::from_json(r#"{ "settings": { "reoptimize": false } }"#).unwrap();
    let model = Model::new(config).unwrap();
    assert_eq!(model.setting("reoptimize"), Some(&SettingValue::Bool(false)));
    assert_eq!(model.setting("n_mh_blocks"), Some(&SettingValue::Int(1)));
}

#[test]
fn test_prior_draws_score() {
    let mut model = model_with_sectors(1);
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    let mut accepted = 0;
    for _ in 0..20 {
        let draw = model.draw_from_prior(&mut rng).unwrap();
        match model.update(&draw) {
            Ok(_) => {
                accepted += 1;
                assert!(model.log_prior().unwrap().is_finite());
            }
            Err(e) => assert!(e.is_rejectable_draw(), "{}", e),
        }
    }
    assert!(accepted > 0);
}

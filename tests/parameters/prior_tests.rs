//! Integration tests for prior densities and draws

use approx::assert_relative_eq;
use dsge_core::parameters::Prior;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn sample_mean(prior: &Prior, n: usize, seed: u64) -> f64 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| prior.sample(&mut rng).unwrap()).sum::<f64>() / n as f64
}

#[test]
fn test_sample_means() {
    let priors = [
        Prior::Normal { mean: 0.30, std: 0.05 },
        Prior::Beta { mean: 0.5, std: 0.1 },
        Prior::Gamma { mean: 0.25, std: 0.1 },
        Prior::Uniform { lower: 1.0, upper: 3.0 },
    ];
    for prior in &priors {
        let expected = prior.mean().unwrap();
        assert_relative_eq!(sample_mean(prior, 20_000, 42), expected, max_relative = 0.02);
    }
}

#[test]
fn test_root_inverse_gamma_mean() {
    let prior = Prior::RootInverseGamma { nu: 4.0, tau: 0.05 };
    let expected = prior.mean().unwrap();
    assert_relative_eq!(sample_mean(&prior, 50_000, 3), expected, max_relative = 0.03);
}

#[test]
fn test_draws_are_reproducible() {
    let prior = Prior::Beta { mean: 0.05, std: 0.005 };
    let mut a = ChaCha8Rng::seed_from_u64(9);
    let mut b = ChaCha8Rng::seed_from_u64(9);
    for _ in 0..10 {
        assert_eq!(prior.sample(&mut a).unwrap(), prior.sample(&mut b).unwrap());
    }
}

#[test]
fn test_log_pdf_support() {
    assert_eq!(
        Prior::Gamma { mean: 2.0, std: 0.1 }.log_pdf(-1.0).unwrap(),
        f64::NEG_INFINITY
    );
    assert_eq!(
        Prior::Uniform { lower: 0.0, upper: 1.0 }.log_pdf(2.0).unwrap(),
        f64::NEG_INFINITY
    );
    assert_relative_eq!(
        Prior::Normal { mean: 0.0, std: 1.0 }.log_pdf(0.0).unwrap(),
        -0.5 * (2.0 * std::f64::consts::PI).ln(),
        epsilon = 1e-12
    );
}

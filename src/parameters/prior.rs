//! Prior distributions for estimated parameters
//!
//! Priors are stored by their moments (the way they are reported in estimation
//! tables) and converted to shape/scale form on use. Densities come from
//! `statrs`; draws come from `rand_distr` with a caller-supplied generator, so
//! every stochastic operation is scoped to whoever owns the RNG.

use rand::Rng;
use rand_distr::Distribution;
use serde::{Deserialize, Serialize};
use statrs::distribution::Continuous;
use statrs::function::gamma::ln_gamma;

use crate::error::{ModelError, Result};

/// A prior distribution over a parameter's model-space value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Prior {
    /// Normal with the given mean and standard deviation
    Normal { mean: f64, std: f64 },

    /// Beta on (0, 1) with the given mean and standard deviation
    Beta { mean: f64, std: f64 },

    /// Gamma on (0, ∞) with the given mean and standard deviation
    Gamma { mean: f64, std: f64 },

    /// Inverse gamma on a standard deviation: `p(σ) ∝ σ^(-ν-1) exp(-ν τ² / 2σ²)`
    RootInverseGamma { nu: f64, tau: f64 },

    /// Uniform on `[lower, upper]`
    Uniform { lower: f64, upper: f64 },
}

fn invalid(prior: &Prior, why: impl std::fmt::Display) -> ModelError {
    ModelError::InvalidDefinition(format!("{:?}: {}", prior, why))
}

impl Prior {
    /// Check that the hyperparameters describe a proper distribution
    pub fn validate(&self) -> Result<()> {
        let ok = match *self {
            Prior::Normal { mean, std } => mean.is_finite() && std > 0.0 && std.is_finite(),
            Prior::Beta { mean, std } => {
                mean > 0.0 && mean < 1.0 && std > 0.0 && std * std < mean * (1.0 - mean)
            }
            Prior::Gamma { mean, std } => mean > 0.0 && std > 0.0 && mean.is_finite() && std.is_finite(),
            Prior::RootInverseGamma { nu, tau } => nu > 0.0 && tau > 0.0 && nu.is_finite() && tau.is_finite(),
            Prior::Uniform { lower, upper } => lower.is_finite() && upper.is_finite() && lower < upper,
        };

        if ok {
            Ok(())
        } else {
            Err(invalid(self, "hyperparameters do not define a proper distribution"))
        }
    }

    /// Shape parameters `(α, β)` of a Beta prior given by its moments
    fn beta_shapes(mean: f64, std: f64) -> (f64, f64) {
        let common = mean * (1.0 - mean) / (std * std) - 1.0;
        (mean * common, (1.0 - mean) * common)
    }

    /// Shape `k` and scale `θ` of a Gamma prior given by its moments
    fn gamma_shape_scale(mean: f64, std: f64) -> (f64, f64) {
        let var = std * std;
        (mean * mean / var, var / mean)
    }

    /// Log density at `x`; `-∞` outside the support
    ///
    /// # Examples
    ///
    /// ```
    /// use dsge_core::parameters::Prior;
    ///
    /// let prior = Prior::Normal { mean: 0.0, std: 1.0 };
    /// let lp = prior.log_pdf(0.0).unwrap();
    /// assert!((lp + 0.5 * (2.0 * std::f64::consts::PI).ln()).abs() < 1e-12);
    /// ```
    pub fn log_pdf(&self, x: f64) -> Result<f64> {
        self.validate()?;

        let lp = match *self {
            Prior::Normal { mean, std } => statrs::distribution::Normal::new(mean, std)
                .map_err(|e| invalid(self, e))?
                .ln_pdf(x),
            Prior::Beta { mean, std } => {
                if x <= 0.0 || x >= 1.0 {
                    return Ok(f64::NEG_INFINITY);
                }
                let (a, b) = Self::beta_shapes(mean, std);
                statrs::distribution::Beta::new(a, b)
                    .map_err(|e| invalid(self, e))?
                    .ln_pdf(x)
            }
            Prior::Gamma { mean, std } => {
                if x <= 0.0 {
                    return Ok(f64::NEG_INFINITY);
                }
                let (shape, scale) = Self::gamma_shape_scale(mean, std);
                // statrs parameterizes by rate
                statrs::distribution::Gamma::new(shape, 1.0 / scale)
                    .map_err(|e| invalid(self, e))?
                    .ln_pdf(x)
            }
            Prior::RootInverseGamma { nu, tau } => {
                if x <= 0.0 {
                    return Ok(f64::NEG_INFINITY);
                }
                std::f64::consts::LN_2 - ln_gamma(nu / 2.0) + (nu / 2.0) * (nu * tau * tau / 2.0).ln()
                    - (nu + 1.0) * x.ln()
                    - nu * tau * tau / (2.0 * x * x)
            }
            Prior::Uniform { lower, upper } => statrs::distribution::Uniform::new(lower, upper)
                .map_err(|e| invalid(self, e))?
                .ln_pdf(x),
        };

        Ok(lp)
    }

    /// Draw one value using the caller's generator
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        self.validate()?;

        let draw = match *self {
            Prior::Normal { mean, std } => rand_distr::Normal::new(mean, std)
                .map_err(|e| invalid(self, e))?
                .sample(rng),
            Prior::Beta { mean, std } => {
                let (a, b) = Self::beta_shapes(mean, std);
                rand_distr::Beta::new(a, b)
                    .map_err(|e| invalid(self, e))?
                    .sample(rng)
            }
            Prior::Gamma { mean, std } => {
                let (shape, scale) = Self::gamma_shape_scale(mean, std);
                rand_distr::Gamma::new(shape, scale)
                    .map_err(|e| invalid(self, e))?
                    .sample(rng)
            }
            Prior::RootInverseGamma { nu, tau } => {
                // σ⁻² ~ Gamma(ν/2, scale 2/(ντ²))
                let precision = rand_distr::Gamma::new(nu / 2.0, 2.0 / (nu * tau * tau))
                    .map_err(|e| invalid(self, e))?
                    .sample(rng);
                1.0 / precision.sqrt()
            }
            Prior::Uniform { lower, upper } => rng.gen_range(lower..upper),
        };

        Ok(draw)
    }

    /// Mean of the distribution, where it exists
    pub fn mean(&self) -> Option<f64> {
        match *self {
            Prior::Normal { mean, .. } | Prior::Beta { mean, .. } | Prior::Gamma { mean, .. } => Some(mean),
            Prior::Uniform { lower, upper } => Some((lower + upper) / 2.0),
            Prior::RootInverseGamma { nu, tau } => {
                if nu <= 1.0 {
                    return None;
                }
                let half = nu / 2.0;
                Some(
                    (nu * tau * tau / 2.0).sqrt()
                        * (ln_gamma(half - 0.5) - ln_gamma(half)).exp(),
                )
            }
        }
    }
}

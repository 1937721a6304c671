//! Financial-frictions building blocks
//!
//! Closed-form pieces of the Bernanke-Gertler-Gilchrist contract with a
//! lognormal idiosyncratic shock to entrepreneurs' capital. Every function is
//! written in terms of the default-threshold quantile `z` and the dispersion
//! `σ`; the threshold itself is `ω(z, σ) = exp(σz - σ²/2)`.
//!
//! Notation:
//! - `Γ`: share of gross capital returns going to the lender
//! - `G`: share going to the lender from defaulting entrepreneurs
//! - `μ`: monitoring cost consistent with a given spread
//! - `nk`: net worth to capital ratio

use statrs::function::erf::{erfc, erfc_inv};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal density
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

/// Standard normal quantile function; NaN outside `[0, 1]`
pub fn norm_quantile(p: f64) -> f64 {
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    -std::f64::consts::SQRT_2 * erfc_inv(2.0 * p)
}

/// Default threshold `ω(z, σ)`
pub fn omega(z: f64, sigma: f64) -> f64 {
    (sigma * z - 0.5 * sigma * sigma).exp()
}

/// `G(z, σ)`
pub fn g(z: f64, sigma: f64) -> f64 {
    norm_cdf(z - sigma)
}

/// `Γ(z, σ)`
pub fn gamma(z: f64, sigma: f64) -> f64 {
    omega(z, sigma) * (1.0 - norm_cdf(z)) + norm_cdf(z - sigma)
}

/// `∂G/∂ω`
pub fn dg_domega(z: f64, sigma: f64) -> f64 {
    norm_pdf(z) / sigma
}

/// `∂²G/∂ω²`
pub fn d2g_domega2(z: f64, sigma: f64) -> f64 {
    -z * norm_pdf(z) / omega(z, sigma) / (sigma * sigma)
}

/// `∂Γ/∂ω`
pub fn dgamma_domega(z: f64) -> f64 {
    1.0 - norm_cdf(z)
}

/// `∂²Γ/∂ω²`
pub fn d2gamma_domega2(z: f64, sigma: f64) -> f64 {
    -norm_pdf(z) / omega(z, sigma) / sigma
}

/// `∂G/∂σ`
pub fn dg_dsigma(z: f64, sigma: f64) -> f64 {
    -z * norm_pdf(z - sigma) / sigma
}

/// `∂²G/∂ω∂σ`
pub fn d2g_domega_dsigma(z: f64, sigma: f64) -> f64 {
    -norm_pdf(z) * (1.0 - z * (z - sigma)) / (sigma * sigma)
}

/// `∂Γ/∂σ`
pub fn dgamma_dsigma(z: f64, sigma: f64) -> f64 {
    -norm_pdf(z - sigma)
}

/// `∂²Γ/∂ω∂σ`
pub fn d2gamma_domega_dsigma(z: f64, sigma: f64) -> f64 {
    (z / sigma - 1.0) * norm_pdf(z)
}

/// Monitoring cost implied by the spread `spr`
pub fn mu(z: f64, sigma: f64, spr: f64) -> f64 {
    (1.0 - 1.0 / spr)
        / (dg_domega(z, sigma) / dgamma_domega(z) * (1.0 - gamma(z, sigma)) + g(z, sigma))
}

/// Net worth to capital ratio
pub fn nk(z: f64, sigma: f64, spr: f64) -> f64 {
    1.0 - (gamma(z, sigma) - mu(z, sigma, spr) * g(z, sigma)) * spr
}

/// Elasticity of the spread-leverage condition with respect to the threshold
pub fn zeta_b_omega(z: f64, sigma: f64, spr: f64) -> f64 {
    let nk = nk(z, sigma, spr);
    let mu = mu(z, sigma, spr);
    let omega = omega(z, sigma);
    let gamma = gamma(z, sigma);
    let g = g(z, sigma);
    let dgamma = dgamma_domega(z);
    let dg = dg_domega(z, sigma);
    let d2gamma = d2gamma_domega2(z, sigma);
    let d2g = d2g_domega2(z, sigma);

    let wedge = dgamma - mu * dg;
    omega * mu * nk * (d2gamma * dg - d2g * dgamma) / (wedge * wedge)
        / spr
        / (1.0 - gamma + dgamma * (gamma - mu * g) / wedge)
}

/// Elasticity of the zero-profit condition with respect to the threshold
pub fn zeta_z_omega(z: f64, sigma: f64, spr: f64) -> f64 {
    let mu = mu(z, sigma, spr);
    omega(z, sigma) * (dgamma_domega(z) - mu * dg_domega(z, sigma))
        / (gamma(z, sigma) - mu * g(z, sigma))
}

/// Elasticity of the spread with respect to leverage
pub fn zeta_spb(z: f64, sigma: f64, spr: f64) -> f64 {
    let ratio = zeta_b_omega(z, sigma, spr) / zeta_z_omega(z, sigma, spr);
    let nk = nk(z, sigma, spr);
    -ratio / (1.0 - ratio) * nk / (1.0 - nk)
}

//! Parameter list of the financial-frictions model
//!
//! A medium-scale New Keynesian model with a Bernanke-Gertler-Gilchrist
//! credit-spread block. Values are the baseline calibration; priors, bounds
//! and transforms are those used for estimation.

use crate::error::Result;
use crate::parameters::{
    Interval, Parameter, ParameterBuilder, ParameterSet, Prior, Scaling, Transform,
};
use crate::steady_state::SteadyState;

/// Model specification identifier
pub const SPEC: &str = "ff990";

const UNIT: (f64, f64) = (1e-5, 0.999);
const UNIT_OPEN: (f64, f64) = (1e-5, 0.99999);
const POSITIVE: (f64, f64) = (1e-5, 10.0);
const SHOCK_SD: (f64, f64) = (1e-8, 5.0);

fn free(
    key: &str,
    value: f64,
    (lower, upper): (f64, f64),
    transform: Transform,
    prior: Prior,
) -> Result<ParameterBuilder> {
    let bounds = Interval::new(lower, upper)?;
    Ok(Parameter::builder(key, value)
        .bounds(bounds)
        .transform(transform, bounds)
        .prior(prior))
}

fn fixed(key: &str, value: f64, (lower, upper): (f64, f64)) -> Result<ParameterBuilder> {
    Ok(Parameter::builder(key, value)
        .bounds(Interval::new(lower, upper)?)
        .fixed())
}

fn persistence(key: &str, value: f64, description: &str) -> Result<ParameterBuilder> {
    let prior = Prior::Beta { mean: 0.5, std: 0.2 };
    Ok(free(key, value, UNIT, Transform::SquareRoot, prior)?.description(description))
}

fn shock_sd(key: &str, value: f64, description: &str) -> Result<ParameterBuilder> {
    let prior = Prior::RootInverseGamma { nu: 2.0, tau: 0.1 };
    Ok(free(key, value, SHOCK_SD, Transform::Exponential, prior)?.description(description))
}

fn estimated() -> Result<Vec<ParameterBuilder>> {
    use Prior::*;
    use Transform::*;

    Ok(vec![
        free("α", 0.1596, UNIT, SquareRoot, Normal { mean: 0.30, std: 0.05 })?
            .description("Capital share")
            .tex_label("\\alpha"),
        free("ζ_p", 0.8940, UNIT, SquareRoot, Beta { mean: 0.5, std: 0.1 })?
            .description("Calvo parameter for prices")
            .tex_label("\\zeta_p"),
        free("ι_p", 0.1865, UNIT, SquareRoot, Beta { mean: 0.5, std: 0.15 })?
            .description("Price indexation to past inflation")
            .tex_label("\\iota_p"),
        free("Φ", 1.1066, (1.0, 10.0), Exponential, Normal { mean: 1.25, std: 0.12 })?
            .description("Fixed costs in production")
            .tex_label("\\Phi"),
        free("S''", 2.7314, (-15.0, 15.0), Untransformed, Normal { mean: 4.0, std: 1.5 })?
            .description("Investment adjustment cost curvature")
            .tex_label("S''"),
        free("h", 0.5347, UNIT, SquareRoot, Beta { mean: 0.7, std: 0.1 })?
            .description("Habit persistence")
            .tex_label("h"),
        free("ppsi", 0.6862, UNIT, SquareRoot, Beta { mean: 0.5, std: 0.15 })?
            .description("Capital utilization cost")
            .tex_label("\\psi"),
        free("ν_l", 2.5975, POSITIVE, Exponential, Normal { mean: 2.0, std: 0.75 })?
            .description("Inverse Frisch elasticity of labor supply")
            .tex_label("\\nu_l"),
        free("ζ_w", 0.9291, UNIT, SquareRoot, Beta { mean: 0.5, std: 0.1 })?
            .description("Calvo parameter for wages")
            .tex_label("\\zeta_w"),
        free("ι_w", 0.2992, UNIT, SquareRoot, Beta { mean: 0.5, std: 0.15 })?
            .description("Wage indexation to past inflation")
            .tex_label("\\iota_w"),
        free("β", 0.1402, POSITIVE, Exponential, Gamma { mean: 0.25, std: 0.1 })?
            .scaling(Scaling::DiscountFactor)
            .description("Discount rate, annualized percent")
            .tex_label("100(\\beta^{-1} - 1)"),
        free("ψ1", 1.3679, POSITIVE, Exponential, Normal { mean: 1.5, std: 0.25 })?
            .description("Policy response to inflation")
            .tex_label("\\psi_1"),
        free("ψ2", 0.0388, (-0.5, 0.5), Untransformed, Normal { mean: 0.12, std: 0.05 })?
            .description("Policy response to the output gap")
            .tex_label("\\psi_2"),
        free("ψ3", 0.2464, (-0.5, 0.5), Untransformed, Normal { mean: 0.12, std: 0.05 })?
            .description("Policy response to output gap growth")
            .tex_label("\\psi_3"),
        free("σ_c", 0.8719, POSITIVE, Exponential, Normal { mean: 1.5, std: 0.37 })?
            .description("Coefficient of relative risk aversion")
            .tex_label("\\sigma_c"),
        free("ρ", 0.7126, UNIT, SquareRoot, Beta { mean: 0.75, std: 0.10 })?
            .description("Interest rate smoothing")
            .tex_label("\\rho_R"),
        free("spr", 1.7444, (0.0, 100.0), Exponential, Gamma { mean: 2.0, std: 0.1 })?
            .scaling(Scaling::QuarterlyGross)
            .description("Steady-state credit spread, annualized percent")
            .tex_label("SP_*"),
        free("ζ_spb", 0.0559, UNIT_OPEN, SquareRoot, Beta { mean: 0.05, std: 0.005 })?
            .description("Elasticity of the spread with respect to leverage")
            .tex_label("\\zeta_{sp,b}"),
        free("γ", 0.3673, (-5.0, 5.0), Untransformed, Normal { mean: 0.4, std: 0.1 })?
            .scaling(Scaling::Divide(100.0))
            .description("Steady-state growth rate of technology, quarterly percent")
            .tex_label("100\\gamma"),
        persistence("ρ_g", 0.9863, "AR(1) coefficient of government spending")?,
        persistence("ρ_b", 0.9410, "AR(1) coefficient of the risk premium")?,
        persistence("ρ_μ", 0.8735, "AR(1) coefficient of the marginal efficiency of investment")?,
        persistence("ρ_z", 0.9446, "AR(1) coefficient of technology")?,
        persistence("ρ_λ_f", 0.8827, "AR(1) coefficient of the price mark-up")?,
        persistence("ρ_λ_w", 0.3884, "AR(1) coefficient of the wage mark-up")?,
        persistence("ρ_rm", 0.2135, "AR(1) coefficient of the monetary policy shock")?,
        persistence("ρ_σ_w", 0.9898, "AR(1) coefficient of the spread shock")?,
        shock_sd("σ_g", 2.5230, "Standard deviation of government spending shocks")?,
        shock_sd("σ_b", 0.0292, "Standard deviation of risk premium shocks")?,
        shock_sd("σ_μ", 0.4559, "Standard deviation of investment efficiency shocks")?,
        shock_sd("σ_z", 0.6742, "Standard deviation of technology shocks")?,
        shock_sd("σ_λ_f", 0.1314, "Standard deviation of price mark-up shocks")?,
        shock_sd("σ_λ_w", 0.3864, "Standard deviation of wage mark-up shocks")?,
        shock_sd("σ_r_m", 0.2380, "Standard deviation of monetary policy shocks")?,
        free("σ_σ_ω", 0.0428, SHOCK_SD, Exponential, RootInverseGamma { nu: 4.0, tau: 0.05 })?
            .description("Standard deviation of spread shocks"),
    ])
}

fn calibrated() -> Result<Vec<ParameterBuilder>> {
    Ok(vec![
        fixed("δ", 0.025, (0.0, 1.0))?
            .description("Depreciation rate")
            .tex_label("\\delta"),
        fixed("Fω", 0.03, UNIT_OPEN)?
            .scaling(Scaling::QuarterlyFailure)
            .description("Annual default probability of entrepreneurs")
            .tex_label("F(\\bar\\omega)"),
        fixed("γ_star", 0.99, UNIT_OPEN)?
            .description("Entrepreneurs' survival rate")
            .tex_label("\\gamma_*"),
        fixed("g_star", 0.18, UNIT_OPEN)?
            .description("Government spending share of output")
            .tex_label("g_*"),
        fixed("Upsilon", 1.0, (0.0, 10.0))?
            .description("Trend rate of investment-specific technology")
            .tex_label("\\Upsilon"),
        fixed("λ_w", 1.5, (0.0, 10.0))?
            .description("Steady-state wage mark-up")
            .tex_label("\\lambda_w"),
        fixed("π_star", 0.5, POSITIVE)?
            .scaling(Scaling::OnePlusPercent)
            .description("Steady-state inflation, quarterly percent")
            .tex_label("\\pi_*"),
        fixed("ε_p", 10.0, (1e-5, 100.0))?
            .description("Curvature of the Kimball aggregator for prices")
            .tex_label("\\epsilon_p"),
        fixed("ε_w", 10.0, (1e-5, 100.0))?
            .description("Curvature of the Kimball aggregator for wages")
            .tex_label("\\epsilon_w"),
    ])
}

/// `(description, tex label)` of each solved quantity, in [`SteadyState::KEYS`] order
const STEADY_STATE_LABELS: [(&str, &str); 25] = [
    ("Steady-state growth rate of technology", "z_*"),
    ("Steady-state short-term rate of return", "r_*"),
    ("Steady-state nominal rate, annualized percent", "R^n_*"),
    ("Steady-state rental rate of capital", "r^k_*"),
    ("Steady-state wage", "w_*"),
    ("Steady-state labor", "L_*"),
    ("Steady-state effective capital", "k_*"),
    ("Steady-state installed capital", "\\bar k_*"),
    ("Steady-state investment", "i_*"),
    ("Steady-state output", "y_*"),
    ("Steady-state consumption", "c_*"),
    ("Steady-state labor income over consumption", "wl_c"),
    ("Default-threshold quantile", "z_{\\omega*}"),
    ("Dispersion of idiosyncratic entrepreneur shocks", "\\sigma_{\\omega*}"),
    ("Default threshold", "\\bar\\omega_*"),
    ("Steady-state entrepreneurial net worth", "n_*"),
    ("Steady-state entrepreneurial equity", "v_*"),
    ("Elasticity of the spread to dispersion", "\\zeta_{sp,\\sigma_\\omega}"),
    ("Elasticity of the spread to monitoring costs", "\\zeta_{sp,\\mu_e}"),
    ("Elasticity of net worth to the return on capital", "\\zeta_{n,R^k}"),
    ("Elasticity of net worth to the riskless rate", "\\zeta_{n,R}"),
    ("Elasticity of net worth to the price of capital", "\\zeta_{n,q^k}"),
    ("Elasticity of net worth to lagged net worth", "\\zeta_{n,n}"),
    ("Elasticity of net worth to monitoring costs", "\\zeta_{n,\\mu_e}"),
    ("Elasticity of net worth to dispersion", "\\zeta_{n,\\sigma_\\omega}"),
];

/// The full baseline parameter set, steady-state quantities included
///
/// Steady-state quantities are NaN until the first solve.
pub fn parameters() -> Result<ParameterSet> {
    let mut params = ParameterSet::new();

    for builder in estimated()?.into_iter().chain(calibrated()?) {
        params.add_parameter(builder.build()?)?;
    }

    for (key, (description, tex_label)) in SteadyState::KEYS.iter().zip(STEADY_STATE_LABELS) {
        params.add_parameter(Parameter::steady_state(key, description, tex_label))?;
    }

    Ok(params)
}

//! The steady-state pipeline
//!
//! [`solve`] reads scaled parameter values from a [`ParameterSet`] and returns a
//! [`SteadyState`]; it never writes to the set. Writing the result back into the
//! steady-state parameters is the caller's job (see
//! [`Model::steady_state`](crate::model::Model::steady_state)).

use log::{debug, trace};

use crate::error::{ModelError, Result};
use crate::parameters::ParameterSet;
use crate::steady_state::frictions::{
    d2g_domega_dsigma, d2gamma_domega_dsigma, dg_domega, dg_dsigma, dgamma_domega, dgamma_dsigma,
    g, gamma, mu, nk, norm_quantile, omega, zeta_b_omega, zeta_spb, zeta_z_omega,
};
use crate::steady_state::root::{find_positive_root, RootFindControl};
use crate::steady_state::{SolverOptions, SteadyState};

/// Scaled inputs of the pipeline
#[derive(Debug, Clone, Copy)]
struct Inputs {
    alpha: f64,
    beta: f64,
    delta: f64,
    gamma: f64,
    upsilon: f64,
    sigma_c: f64,
    phi: f64,
    g_star: f64,
    lambda_w: f64,
    pi_star: f64,
    spr: f64,
    zeta_spb: f64,
    f_omega: f64,
    gamma_star: f64,
}

impl Inputs {
    fn read(params: &ParameterSet) -> Result<Self> {
        Ok(Self {
            alpha: params.value_of("α")?,
            beta: params.value_of("β")?,
            delta: params.value_of("δ")?,
            gamma: params.value_of("γ")?,
            upsilon: params.value_of("Upsilon")?,
            sigma_c: params.value_of("σ_c")?,
            phi: params.value_of("Φ")?,
            g_star: params.value_of("g_star")?,
            lambda_w: params.value_of("λ_w")?,
            pi_star: params.value_of("π_star")?,
            spr: params.value_of("spr")?,
            zeta_spb: params.value_of("ζ_spb")?,
            f_omega: params.value_of("Fω")?,
            gamma_star: params.value_of("γ_star")?,
        })
    }
}

/// Balanced-growth quantities with no feedback from the financial block
#[derive(Debug, Clone, Copy)]
struct Macro {
    z_star: f64,
    rstar: f64,
    rstarn: f64,
    r_k_star: f64,
    wstar: f64,
    lstar: f64,
    kstar: f64,
    kbarstar: f64,
    istar: f64,
    ystar: f64,
    cstar: f64,
    wl_c: f64,
}

/// Net-worth and BGG elasticity block
#[derive(Debug, Clone, Copy)]
struct Financial {
    omega_bar_star: f64,
    nstar: f64,
    vstar: f64,
    zeta_sp_sigma_omega: f64,
    zeta_sp_mu_e: f64,
    zeta_n_rk: f64,
    zeta_n_r: f64,
    zeta_n_qk: f64,
    zeta_n_n: f64,
    zeta_n_mu_e: f64,
    zeta_n_sigma_omega: f64,
}

fn finite(quantity: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::InvalidParameterDraw {
            quantity: quantity.to_string(),
            value,
        })
    }
}

fn positive(quantity: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ModelError::InvalidParameterDraw {
            quantity: quantity.to_string(),
            value,
        })
    }
}

/// Solve for the steady state of the parameter values currently in `params`
///
/// # Errors
///
/// - `UnknownKey` if an input parameter is not declared
/// - `InvalidParameterDraw` if the closed-form algebra or the default-threshold
///   quantile produces a non-finite or economically invalid value; the caller
///   should reject the draw
/// - `SteadyStateDefect` if the elasticity block is non-finite
///
/// A failed root-find for `σ_ω` is not an error: the fallback from `options`
/// is used and [`SteadyState::used_fallback`] is set.
pub fn solve(params: &ParameterSet, options: &SolverOptions) -> Result<SteadyState> {
    let inputs = Inputs::read(params)?;

    let m = closed_form(&inputs)?;

    let z_omega = finite("zω_star", norm_quantile(inputs.f_omega))?;

    let (sigma_omega, used_fallback) = dispersion(&inputs, z_omega, options);

    let f = financial(&inputs, &m, z_omega, sigma_omega)?;

    Ok(SteadyState {
        z_star: m.z_star,
        rstar: m.rstar,
        rstarn: m.rstarn,
        r_k_star: m.r_k_star,
        wstar: m.wstar,
        lstar: m.lstar,
        kstar: m.kstar,
        kbarstar: m.kbarstar,
        istar: m.istar,
        ystar: m.ystar,
        cstar: m.cstar,
        wl_c: m.wl_c,
        z_omega_star: z_omega,
        sigma_omega_star: sigma_omega,
        omega_bar_star: f.omega_bar_star,
        nstar: f.nstar,
        vstar: f.vstar,
        zeta_sp_sigma_omega: f.zeta_sp_sigma_omega,
        zeta_sp_mu_e: f.zeta_sp_mu_e,
        zeta_n_rk: f.zeta_n_rk,
        zeta_n_r: f.zeta_n_r,
        zeta_n_qk: f.zeta_n_qk,
        zeta_n_n: f.zeta_n_n,
        zeta_n_mu_e: f.zeta_n_mu_e,
        zeta_n_sigma_omega: f.zeta_n_sigma_omega,
        used_fallback,
    })
}

/// Step 1: closed-form balanced-growth algebra
fn closed_form(p: &Inputs) -> Result<Macro> {
    let alpha = p.alpha;
    let growth = (1.0 + p.gamma) * p.upsilon.powf(1.0 / (1.0 - alpha));

    let z_star = finite(
        "z_star",
        (1.0 + p.gamma).ln() + alpha / (1.0 - alpha) * p.upsilon.ln(),
    )?;
    let rstar = positive("rstar", (p.sigma_c * z_star).exp() / p.beta)?;
    let rstarn = finite("Rstarn", 100.0 * (rstar * p.pi_star - 1.0))?;
    let r_k_star = positive("r_k_star", p.spr * rstar * p.upsilon - (1.0 - p.delta))?;

    let wstar = positive(
        "wstar",
        (alpha.powf(alpha) * (1.0 - alpha).powf(1.0 - alpha) * r_k_star.powf(-alpha) / p.phi)
            .powf(1.0 / (1.0 - alpha)),
    )?;
    let lstar = 1.0;
    let kstar = positive("kstar", alpha / (1.0 - alpha) * wstar * lstar / r_k_star)?;
    let kbarstar = positive("kbarstar", kstar * growth)?;
    let istar = finite("istar", kbarstar * (1.0 - (1.0 - p.delta) / growth))?;
    let ystar = positive("ystar", kstar.powf(alpha) * lstar.powf(1.0 - alpha) / p.phi)?;
    let cstar = positive("cstar", (1.0 - p.g_star) * ystar - istar)?;
    let wl_c = finite("wl_c", wstar * lstar / (cstar * p.lambda_w))?;

    Ok(Macro {
        z_star,
        rstar,
        rstarn,
        r_k_star,
        wstar,
        lstar,
        kstar,
        kbarstar,
        istar,
        ystar,
        cstar,
        wl_c,
    })
}

/// Step 3: `σ_ω` solving `ζ_spb(zω, σ_ω, spr) = target`, or the fallback
fn dispersion(p: &Inputs, z_omega: f64, options: &SolverOptions) -> (f64, bool) {
    let control = RootFindControl {
        tolerance: options.tolerance,
        max_iterations: options.max_iterations,
        bracket_growth: options.bracket_growth,
        max_bracket_steps: options.max_bracket_steps,
    };
    let objective = |sigma: f64| zeta_spb(z_omega, sigma, p.spr) - p.zeta_spb;

    match find_positive_root(objective, options.initial_guess, &control) {
        Ok(sigma) => {
            trace!("σ_ω root found at {}", sigma);
            (sigma, false)
        }
        Err(reason) => {
            debug!(
                "σ_ω root-find failed ({}); using fallback {}",
                reason, options.fallback
            );
            (options.fallback, true)
        }
    }
}

/// Step 4: net worth and the elasticities of the financial block
fn financial(p: &Inputs, m: &Macro, z: f64, sigma: f64) -> Result<Financial> {
    let spr = p.spr;
    let gamma_ratio = p.gamma_star / p.beta;

    let mu = mu(z, sigma, spr);
    let nk = nk(z, sigma, spr);
    let rho = 1.0 / nk - 1.0;

    let g = g(z, sigma);
    let gamma = gamma(z, sigma);
    let dg_dw = dg_domega(z, sigma);
    let dgamma_dw = dgamma_domega(z);
    let dg_ds = dg_dsigma(z, sigma);
    let dgamma_ds = dgamma_dsigma(z, sigma);
    let d2g_dwds = d2g_domega_dsigma(z, sigma);
    let d2gamma_dwds = d2gamma_domega_dsigma(z, sigma);

    // Entrepreneurs' equity and the transfer to new entrants, per unit of capital
    let wek = (1.0 - gamma_ratio) * nk - gamma_ratio * (spr * (1.0 - mu * g) - 1.0);
    let vk = (nk - wek) / p.gamma_star;

    let wedge = gamma - mu * g;
    let wedge_prime = dgamma_dw - mu * dg_dw;

    let zeta_z_w = zeta_z_omega(z, sigma, spr);
    let zeta_b_w_over_z_w = zeta_b_omega(z, sigma, spr) / zeta_z_w;

    // Elasticities with respect to the dispersion σ_ω
    let zeta_b_s = sigma
        * (((1.0 - mu * dg_ds / dgamma_ds) / (1.0 - mu * dg_dw / dgamma_dw) - 1.0)
            * dgamma_ds
            * spr
            + mu * nk * (dg_dw * d2gamma_dwds - dgamma_dw * d2g_dwds)
                / (wedge_prime * wedge_prime))
        / ((1.0 - gamma) * spr + dgamma_dw / wedge_prime * (1.0 - nk));
    let zeta_z_s = sigma * (dgamma_ds - mu * dg_ds) / wedge;
    let zeta_sp_sigma_omega =
        (zeta_b_w_over_z_w * zeta_z_s - zeta_b_s) / (1.0 - zeta_b_w_over_z_w);

    // Elasticities with respect to the monitoring cost μ_e
    let zeta_b_mu = -mu * (nk * dgamma_dw * dg_dw / wedge_prime + dgamma_dw * g * spr)
        / ((1.0 - gamma) * wedge_prime * spr + dgamma_dw * (1.0 - nk));
    let zeta_z_mu = -mu * g / wedge;
    let zeta_sp_mu_e = (zeta_b_w_over_z_w * zeta_z_mu - zeta_b_mu) / (1.0 - zeta_b_w_over_z_w);

    // Net-worth evolution
    let omega_bar = omega(z, sigma);
    let rk = spr * p.pi_star * m.rstar;
    let zeta_g_w = dg_dw / g * omega_bar;
    let zeta_g_s = dg_ds / g * sigma;
    let a = p.gamma_star * rk / p.pi_star / m.z_star.exp();
    let lever = a * (1.0 + rho);

    let zeta_n_rk = lever * (1.0 - mu * g * (1.0 - zeta_g_w / zeta_z_w));
    let zeta_n_r = gamma_ratio * (1.0 + rho) * (1.0 - nk + mu * g * spr * zeta_g_w / zeta_z_w);
    let zeta_n_qk = lever * (1.0 - mu * g * (1.0 + zeta_g_w / zeta_z_w / rho))
        - gamma_ratio * (1.0 + rho);
    let zeta_n_n = gamma_ratio + lever * mu * g * zeta_g_w / zeta_z_w / rho;
    let zeta_n_mu_e = lever * mu * g * (1.0 - zeta_g_w * zeta_z_mu / zeta_z_w);
    let zeta_n_sigma_omega = lever * mu * g * (zeta_g_s - zeta_g_w / zeta_z_w * zeta_z_s);

    let out = Financial {
        omega_bar_star: omega_bar,
        nstar: nk * m.kstar,
        vstar: vk * m.kstar,
        zeta_sp_sigma_omega,
        zeta_sp_mu_e,
        zeta_n_rk,
        zeta_n_r,
        zeta_n_qk,
        zeta_n_n,
        zeta_n_mu_e,
        zeta_n_sigma_omega,
    };
    out.check()?;
    Ok(out)
}

impl Financial {
    fn check(&self) -> Result<()> {
        let values = [
            ("ω_bar_star", self.omega_bar_star),
            ("nstar", self.nstar),
            ("vstar", self.vstar),
            ("ζ_spσ_ω", self.zeta_sp_sigma_omega),
            ("ζ_spμ_e", self.zeta_sp_mu_e),
            ("ζ_nRk", self.zeta_n_rk),
            ("ζ_nR", self.zeta_n_r),
            ("ζ_nqk", self.zeta_n_qk),
            ("ζ_nn", self.zeta_n_n),
            ("ζ_nμ_e", self.zeta_n_mu_e),
            ("ζ_nσ_ω", self.zeta_n_sigma_omega),
        ];
        match values.iter().find(|(_, v)| !v.is_finite()) {
            Some((key, value)) => Err(ModelError::SteadyStateDefect(format!(
                "{} is {} for a consistent (zω, σ_ω) pair",
                key, value
            ))),
            None => Ok(()),
        }
    }
}

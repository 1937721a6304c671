//! # Steady-State Solver
//!
//! Computes the non-stochastic steady state of the financial-frictions model
//! from a resolved [`ParameterSet`](crate::parameters::ParameterSet):
//!
//! 1. closed-form balanced-growth quantities (rates, wage, capital, output, ...)
//! 2. the default-threshold quantile `zω` from the failure probability `Fω`
//! 3. a scalar root-find for the idiosyncratic dispersion `σ_ω` matching the
//!    spread-leverage elasticity `ζ_spb`, with a fixed fallback when it fails
//! 4. the BGG elasticities feeding the net-worth evolution equation
//!
//! The solver keeps no state between calls: identical inputs give identical
//! output.

pub mod frictions;
mod root;
pub mod solver;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

pub use solver::solve;

/// Root-finding controls and the fallback dispersion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    /// Starting point for `σ_ω`
    pub initial_guess: f64,

    /// `σ_ω` used when the root-find fails
    pub fallback: f64,

    /// Absolute tolerance on `σ_ω`
    pub tolerance: f64,

    /// Brent iteration limit
    pub max_iterations: usize,

    /// Factor by which the search bracket grows each step
    pub bracket_growth: f64,

    /// Bracket expansion limit
    pub max_bracket_steps: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            initial_guess: 0.5,
            fallback: 0.5,
            tolerance: 1e-12,
            max_iterations: 100,
            bracket_growth: 1.6,
            max_bracket_steps: 60,
        }
    }
}

/// Output of one steady-state solve
///
/// Serialized field names match [`SteadyState::KEYS`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteadyState {
    pub z_star: f64,
    pub rstar: f64,
    #[serde(rename = "Rstarn")]
    pub rstarn: f64,
    pub r_k_star: f64,
    pub wstar: f64,
    #[serde(rename = "Lstar")]
    pub lstar: f64,
    pub kstar: f64,
    pub kbarstar: f64,
    pub istar: f64,
    pub ystar: f64,
    pub cstar: f64,
    pub wl_c: f64,

    #[serde(rename = "zω_star")]
    pub z_omega_star: f64,
    #[serde(rename = "σ_ω_star")]
    pub sigma_omega_star: f64,
    #[serde(rename = "ω_bar_star")]
    pub omega_bar_star: f64,
    pub nstar: f64,
    pub vstar: f64,

    #[serde(rename = "ζ_spσ_ω")]
    pub zeta_sp_sigma_omega: f64,
    #[serde(rename = "ζ_spμ_e")]
    pub zeta_sp_mu_e: f64,
    #[serde(rename = "ζ_nRk")]
    pub zeta_n_rk: f64,
    #[serde(rename = "ζ_nR")]
    pub zeta_n_r: f64,
    #[serde(rename = "ζ_nqk")]
    pub zeta_n_qk: f64,
    #[serde(rename = "ζ_nn")]
    pub zeta_n_n: f64,
    #[serde(rename = "ζ_nμ_e")]
    pub zeta_n_mu_e: f64,
    #[serde(rename = "ζ_nσ_ω")]
    pub zeta_n_sigma_omega: f64,

    /// Whether `sigma_omega_star` is the fallback rather than a root
    pub used_fallback: bool,
}

impl SteadyState {
    /// Keys of the steady-state parameters, in output order
    pub const KEYS: [&'static str; 25] = [
        "z_star", "rstar", "Rstarn", "r_k_star", "wstar", "Lstar", "kstar", "kbarstar",
        "istar", "ystar", "cstar", "wl_c", "zω_star", "σ_ω_star", "ω_bar_star", "nstar",
        "vstar", "ζ_spσ_ω", "ζ_spμ_e", "ζ_nRk", "ζ_nR", "ζ_nqk", "ζ_nn", "ζ_nμ_e", "ζ_nσ_ω",
    ];

    /// `(key, value)` pairs in [`SteadyState::KEYS`] order
    pub fn entries(&self) -> [(&'static str, f64); 25] {
        let values = [
            self.z_star,
            self.rstar,
            self.rstarn,
            self.r_k_star,
            self.wstar,
            self.lstar,
            self.kstar,
            self.kbarstar,
            self.istar,
            self.ystar,
            self.cstar,
            self.wl_c,
            self.z_omega_star,
            self.sigma_omega_star,
            self.omega_bar_star,
            self.nstar,
            self.vstar,
            self.zeta_sp_sigma_omega,
            self.zeta_sp_mu_e,
            self.zeta_n_rk,
            self.zeta_n_r,
            self.zeta_n_qk,
            self.zeta_n_n,
            self.zeta_n_mu_e,
            self.zeta_n_sigma_omega,
        ];
        let mut out = [("", 0.0); 25];
        for (slot, (key, value)) in out.iter_mut().zip(Self::KEYS.iter().zip(values)) {
            *slot = (*key, value);
        }
        out
    }

    /// Value of the quantity named `key`
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, v)| v)
    }

    /// Values in [`SteadyState::KEYS`] order
    pub fn to_array(&self) -> Array1<f64> {
        self.entries().iter().map(|&(_, v)| v).collect()
    }
}

//! Scaling functions from model space to equation space
//!
//! Many parameters are estimated in a convenient unit (annualised percent,
//! probabilities per year) but enter the equilibrium conditions in another.
//! A [`Scaling`] names that conversion so it can be cloned, compared and
//! serialized along with the parameter.

use serde::{Deserialize, Serialize};

/// Map from a parameter's model-space value to its equation-space value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scaling {
    /// `x`; for declaring a scaled parameter whose units need no conversion
    Identity,

    /// `x / d`
    Divide(f64),

    /// `1 + x / 100`
    OnePlusPercent,

    /// `1 / (1 + x / 100)`
    DiscountFactor,

    /// `(1 + x / 100)^(1/4)`, an annual gross rate made quarterly
    QuarterlyGross,

    /// `1 - (1 - x)^(1/4)`, an annual probability made quarterly
    QuarterlyFailure,

    /// `exp(x / 100)`, a log-percent level such as steady-state hours in
    /// models that estimate it
    ExpPercent,
}

impl Scaling {
    /// Apply the scaling to a model-space value
    ///
    /// # Examples
    ///
    /// ```
    /// use dsge_core::parameters::Scaling;
    ///
    /// assert_eq!(Scaling::Divide(100.0).apply(0.5), 0.005);
    /// assert!((Scaling::DiscountFactor.apply(0.1402) - 1.0 / 1.001402).abs() < 1e-15);
    /// ```
    pub fn apply(&self, x: f64) -> f64 {
        match *self {
            Scaling::Identity => x,
            Scaling::Divide(d) => x / d,
            Scaling::OnePlusPercent => 1.0 + x / 100.0,
            Scaling::DiscountFactor => 1.0 / (1.0 + x / 100.0),
            Scaling::QuarterlyGross => (1.0 + x / 100.0).powf(0.25),
            Scaling::QuarterlyFailure => 1.0 - (1.0 - x).powf(0.25),
            Scaling::ExpPercent => (x / 100.0).exp(),
        }
    }
}

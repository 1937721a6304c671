//! Parameter definition and implementation
//!
//! A [`Parameter`] is one of three kinds: an unscaled estimable quantity, a
//! scaled estimable quantity (whose equation-space value is a function of its
//! model-space value), or a steady-state quantity written by the solver. The
//! kinds share the [`ParameterLike`] capability surface and otherwise carry
//! only the fields they need.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::parameters::bounds::{Interval, Transform};
use crate::parameters::prior::Prior;
use crate::parameters::scaling::Scaling;

/// Capabilities shared by every parameter kind
pub trait ParameterLike {
    /// Unique symbolic key
    fn key(&self) -> &str;

    /// Current value (model space for estimable parameters)
    fn value(&self) -> f64;

    /// Human-readable description
    fn description(&self) -> &str;

    /// Label for typeset output
    fn tex_label(&self) -> &str;
}

/// Fields shared by the unscaled and scaled kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimable {
    key: String,
    value: f64,
    valuebounds: Interval,
    transform: Transform,
    transform_parameterization: Interval,
    prior: Option<Prior>,
    fixed: bool,
    description: String,
    tex_label: String,
}

impl Estimable {
    /// Check the declaration invariants
    fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(ModelError::InvalidDefinition("empty parameter key".to_string()));
        }
        if self.fixed == self.prior.is_some() {
            return Err(ModelError::InvalidDefinition(format!(
                "'{}': a prior must be given exactly when the parameter is not fixed",
                self.key
            )));
        }
        if let Some(prior) = &self.prior {
            prior.validate()?;
        }
        let finite_params = self.transform_parameterization.width().is_finite();
        if self.transform != Transform::Untransformed && !finite_params {
            return Err(ModelError::InvalidDefinition(format!(
                "'{}': {:?} transform needs a finite parameterization interval",
                self.key, self.transform
            )));
        }
        if !self.value.is_finite() {
            return Err(ModelError::InvalidInput(format!(
                "'{}': initial value {} is not finite",
                self.key, self.value
            )));
        }
        self.valuebounds.check(&self.key, self.value)
    }

    fn set_value(&mut self, value: f64) -> Result<()> {
        if self.fixed {
            return Err(ModelError::FixedParameterViolation { key: self.key.clone() });
        }
        self.override_value(value)
    }

    fn override_value(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(ModelError::InvalidInput(format!(
                "'{}': value {} is not finite",
                self.key, value
            )));
        }
        self.valuebounds.check(&self.key, value)?;
        self.value = value;
        Ok(())
    }

    fn to_real_line(&self) -> Result<f64> {
        self.transform
            .to_real(&self.key, self.value, &self.valuebounds, &self.transform_parameterization)
    }

    fn from_real_line(&self, x: f64) -> Result<f64> {
        self.transform
            .to_bounded(&self.key, x, &self.valuebounds, &self.transform_parameterization)
    }
}

/// An estimable parameter whose equation-space value equals its value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnscaledParameter {
    core: Estimable,
}

/// An estimable parameter that enters the equations through a [`Scaling`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledParameter {
    core: Estimable,
    scaling: Scaling,
}

/// A quantity computed by the steady-state solver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteadyStateParameter {
    key: String,
    #[serde(skip, default = "undefined")]
    value: f64,
    description: String,
    tex_label: String,
}

fn undefined() -> f64 {
    f64::NAN
}

impl SteadyStateParameter {
    /// Declare a steady-state quantity; its value is NaN until the first solve
    pub fn new(key: &str, description: &str, tex_label: &str) -> Self {
        Self {
            key: key.to_string(),
            value: f64::NAN,
            description: description.to_string(),
            tex_label: tex_label.to_string(),
        }
    }

    pub(crate) fn assign(&mut self, value: f64) {
        self.value = value;
    }
}

/// A named model quantity, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Parameter {
    Unscaled(UnscaledParameter),
    Scaled(ScaledParameter),
    SteadyState(SteadyStateParameter),
}

impl Parameter {
    /// Start declaring an estimable parameter
    ///
    /// # Examples
    ///
    /// ```
    /// use dsge_core::parameters::{Interval, Parameter, ParameterLike, Prior, Transform};
    ///
    /// let bounds = Interval::new(1e-5, 0.999).unwrap();
    /// let calvo = Parameter::builder("ζ_p", 0.8940)
    ///     .bounds(bounds)
    ///     .transform(Transform::SquareRoot, bounds)
    ///     .prior(Prior::Beta { mean: 0.5, std: 0.1 })
    ///     .description("Calvo parameter for prices")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(calvo.value(), 0.8940);
    /// assert_eq!(calvo.scaled_value(), 0.8940);
    /// ```
    pub fn builder(key: &str, value: f64) -> ParameterBuilder {
        ParameterBuilder::new(key, value)
    }

    /// Declare a steady-state quantity
    pub fn steady_state(key: &str, description: &str, tex_label: &str) -> Self {
        Parameter::SteadyState(SteadyStateParameter::new(key, description, tex_label))
    }

    fn estimable(&self) -> Option<&Estimable> {
        match self {
            Parameter::Unscaled(p) => Some(&p.core),
            Parameter::Scaled(p) => Some(&p.core),
            Parameter::SteadyState(_) => None,
        }
    }

    fn estimable_mut(&mut self) -> Option<&mut Estimable> {
        match self {
            Parameter::Unscaled(p) => Some(&mut p.core),
            Parameter::Scaled(p) => Some(&mut p.core),
            Parameter::SteadyState(_) => None,
        }
    }

    fn not_estimable(&self) -> ModelError {
        ModelError::InvalidInput(format!(
            "'{}' is a steady-state quantity and is written only by the solver",
            self.key()
        ))
    }

    /// Equation-space value: `scaling(value())` for scaled parameters, `value()` otherwise
    pub fn scaled_value(&self) -> f64 {
        match self {
            Parameter::Scaled(p) => p.scaling.apply(p.core.value),
            _ => self.value(),
        }
    }

    /// Set a new model-space value
    ///
    /// # Errors
    ///
    /// `FixedParameterViolation` for fixed parameters, `OutOfBounds` for values
    /// outside the value bounds. The value is unchanged on error.
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        match self.estimable_mut() {
            Some(core) => core.set_value(value),
            None => Err(self.not_estimable()),
        }
    }

    /// Set a new value even if the parameter is fixed
    ///
    /// This is the override path for sub-specification construction; it still
    /// enforces the value bounds.
    pub fn override_value(&mut self, value: f64) -> Result<()> {
        match self.estimable_mut() {
            Some(core) => core.override_value(value),
            None => Err(self.not_estimable()),
        }
    }

    /// Current value mapped to the unconstrained real line
    pub fn to_real_line(&self) -> Result<f64> {
        match self.estimable() {
            Some(core) => core.to_real_line(),
            None => Err(self.not_estimable()),
        }
    }

    /// Model-space value corresponding to the real-line point `x`
    ///
    /// Does not modify the parameter.
    pub fn from_real_line(&self, x: f64) -> Result<f64> {
        match self.estimable() {
            Some(core) => core.from_real_line(x),
            None => Err(self.not_estimable()),
        }
    }

    /// Whether the parameter is held fixed during estimation
    ///
    /// Steady-state quantities are never free, so they report `true`.
    pub fn is_fixed(&self) -> bool {
        self.estimable().map_or(true, |core| core.fixed)
    }

    /// Whether this is a solver-written quantity
    pub fn is_steady_state(&self) -> bool {
        matches!(self, Parameter::SteadyState(_))
    }

    /// Value bounds; `None` for steady-state quantities
    pub fn valuebounds(&self) -> Option<Interval> {
        self.estimable().map(|core| core.valuebounds)
    }

    /// Transform kind; `None` for steady-state quantities
    pub fn transform(&self) -> Option<Transform> {
        self.estimable().map(|core| core.transform)
    }

    /// Auxiliary interval consumed by the transform
    pub fn transform_parameterization(&self) -> Option<Interval> {
        self.estimable().map(|core| core.transform_parameterization)
    }

    /// Prior distribution; absent for fixed parameters
    pub fn prior(&self) -> Option<&Prior> {
        self.estimable().and_then(|core| core.prior.as_ref())
    }

    /// Scaling function, if any
    pub fn scaling(&self) -> Option<Scaling> {
        match self {
            Parameter::Scaled(p) => Some(p.scaling),
            _ => None,
        }
    }

    pub(crate) fn assign_steady_state(&mut self, value: f64) -> Result<()> {
        match self {
            Parameter::SteadyState(p) => {
                p.assign(value);
                Ok(())
            }
            _ => Err(ModelError::InvalidInput(format!(
                "'{}' is not a steady-state quantity",
                self.key()
            ))),
        }
    }

    /// Re-check the declaration invariants (used after deserialization)
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Parameter::Unscaled(p) => p.core.validate(),
            Parameter::Scaled(p) => p.core.validate(),
            Parameter::SteadyState(p) => {
                if p.key.is_empty() {
                    Err(ModelError::InvalidDefinition("empty parameter key".to_string()))
                } else {
                    Ok(())
                }
            }
        }
    }
}

impl ParameterLike for Parameter {
    fn key(&self) -> &str {
        match self {
            Parameter::Unscaled(p) => &p.core.key,
            Parameter::Scaled(p) => &p.core.key,
            Parameter::SteadyState(p) => &p.key,
        }
    }

    fn value(&self) -> f64 {
        match self {
            Parameter::Unscaled(p) => p.core.value,
            Parameter::Scaled(p) => p.core.value,
            Parameter::SteadyState(p) => p.value,
        }
    }

    fn description(&self) -> &str {
        match self {
            Parameter::Unscaled(p) => &p.core.description,
            Parameter::Scaled(p) => &p.core.description,
            Parameter::SteadyState(p) => &p.description,
        }
    }

    fn tex_label(&self) -> &str {
        match self {
            Parameter::Unscaled(p) => &p.core.tex_label,
            Parameter::Scaled(p) => &p.core.tex_label,
            Parameter::SteadyState(p) => &p.tex_label,
        }
    }
}

/// Builder for estimable parameters
#[derive(Debug, Clone)]
pub struct ParameterBuilder {
    core: Estimable,
    transform_params: Option<Interval>,
    scaling: Option<Scaling>,
}

impl ParameterBuilder {
    fn new(key: &str, value: f64) -> Self {
        Self {
            core: Estimable {
                key: key.to_string(),
                value,
                valuebounds: Interval::unbounded(),
                transform: Transform::Untransformed,
                transform_parameterization: Interval::unbounded(),
                prior: None,
                fixed: false,
                description: String::new(),
                tex_label: key.to_string(),
            },
            transform_params: None,
            scaling: None,
        }
    }

    /// Closed interval the value must stay in
    pub fn bounds(mut self, valuebounds: Interval) -> Self {
        self.core.valuebounds = valuebounds;
        self
    }

    /// Transform kind and the auxiliary interval it consumes
    pub fn transform(mut self, transform: Transform, parameterization: Interval) -> Self {
        self.core.transform = transform;
        self.transform_params = Some(parameterization);
        self
    }

    pub fn prior(mut self, prior: Prior) -> Self {
        self.core.prior = Some(prior);
        self
    }

    /// Hold the parameter fixed during estimation; fixed parameters carry no prior
    pub fn fixed(mut self) -> Self {
        self.core.fixed = true;
        self.core.prior = None;
        self
    }

    pub fn scaling(mut self, scaling: Scaling) -> Self {
        self.scaling = Some(scaling);
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.core.description = description.to_string();
        self
    }

    pub fn tex_label(mut self, tex_label: &str) -> Self {
        self.core.tex_label = tex_label.to_string();
        self
    }

    /// Validate the declaration and produce the parameter
    ///
    /// Without an explicit transform interval, the value bounds are used.
    pub fn build(self) -> Result<Parameter> {
        let mut core = self.core;
        core.transform_parameterization = self.transform_params.unwrap_or(core.valuebounds);
        core.validate()?;

        Ok(match self.scaling {
            Some(scaling) => Parameter::Scaled(ScaledParameter { core, scaling }),
            None => Parameter::Unscaled(UnscaledParameter { core }),
        })
    }
}

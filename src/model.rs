//! Model instances
//!
//! A [`Model`] owns one parameter set, one index registry and its settings.
//! Instances share nothing: cloning a model gives a fully independent copy
//! that can be updated and solved on another thread.

use log::debug;
use rand::Rng;

use crate::error::{ModelError, Result};
use crate::indices::{IndexCategory, IndexRegistry};
use crate::models::{financial_frictions, subspecs};
use crate::parameters::{Parameter, ParameterLike, ParameterSet};
use crate::settings::{ModelConfig, Setting, SettingValue, Settings};
use crate::steady_state::{self, SolverOptions, SteadyState};

/// Attempts per parameter before a prior draw is given up
const MAX_PRIOR_DRAWS: usize = 1000;

/// A financial-frictions model instance
#[derive(Debug, Clone)]
pub struct Model {
    subspec: String,
    parameters: ParameterSet,
    indices: IndexRegistry,
    settings: Settings,
    solver: SolverOptions,
}

impl Model {
    /// Build a model from a configuration and solve its steady state
    ///
    /// # Errors
    ///
    /// - `InvalidDimension` if `config.n_sectors < 1`
    /// - `UnknownSubspec` for an unknown sub-specification
    /// - `UnknownKey` for a settings override with no matching default
    /// - any error of the initial steady-state solve
    ///
    /// # Examples
    ///
    /// ```
    /// use dsge_core::indices::IndexCategory;
    /// use dsge_core::settings::ModelConfig;
    /// use dsge_core::Model;
    ///
    /// let model = Model::new(ModelConfig::default()).unwrap();
    /// assert_eq!(model.spec(), "ff990");
    /// assert!(model.value_of("rstar").unwrap() > 1.0);
    /// assert!(model.index(IndexCategory::EndogenousStates, "y_1_t").is_ok());
    /// ```
    pub fn new(config: ModelConfig) -> Result<Self> {
        let indices = IndexRegistry::build(config.n_sectors)?;
        let settings = config.resolve_settings()?;

        let mut parameters = financial_frictions::parameters()?;
        subspecs::apply(&config.subspec, &mut parameters)?;

        let mut model = Self {
            subspec: config.subspec,
            parameters,
            indices,
            settings,
            solver: config.solver,
        };
        model.steady_state()?;
        Ok(model)
    }

    /// Model specification identifier
    pub fn spec(&self) -> &str {
        financial_frictions::SPEC
    }

    pub fn subspec(&self) -> &str {
        &self.subspec
    }

    /// Number of productive sectors
    pub fn n_sectors(&self) -> usize {
        self.indices.n_sectors()
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn indices(&self) -> &IndexRegistry {
        &self.indices
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn solver_options(&self) -> &SolverOptions {
        &self.solver
    }

    /// Declare an additional parameter
    pub fn add_parameter(&mut self, param: Parameter) -> Result<()> {
        self.parameters.add_parameter(param)
    }

    /// Declare an additional setting
    pub fn add_setting(&mut self, setting: Setting) -> Result<()> {
        self.settings.add_setting(setting)
    }

    pub fn setting(&self, key: &str) -> Option<&SettingValue> {
        self.settings.value(key)
    }

    /// Scaled value of an estimable parameter or the value of a steady-state
    /// quantity
    pub fn value_of(&self, key: &str) -> Result<f64> {
        self.parameters.value_of(key)
    }

    /// Position of `name` within `category`
    pub fn index(&self, category: IndexCategory, name: &str) -> Result<usize> {
        self.indices.index(category, name)
    }

    /// Re-solve the steady state and store it in the steady-state parameters
    pub fn steady_state(&mut self) -> Result<SteadyState> {
        let solved = steady_state::solve(&self.parameters, &self.solver)?;
        self.parameters.assign_steady_state(&solved)?;
        Ok(solved)
    }

    /// Apply a full vector of free-parameter values and re-solve
    ///
    /// Values are taken in the declared order of the free parameters. The
    /// update is staged on a copy of the parameter set: if any value is
    /// rejected, or the steady state cannot be computed for the new values,
    /// the model is left exactly as it was.
    pub fn update(&mut self, values: &[f64]) -> Result<SteadyState> {
        let mut staged = self.parameters.clone();
        let solved = staged
            .update(values)
            .and_then(|_| steady_state::solve(&staged, &self.solver))
            .map_err(|e| {
                debug!("rejected parameter update: {}", e);
                e
            })?;
        staged.assign_steady_state(&solved)?;

        self.parameters = staged;
        Ok(solved)
    }

    /// Map a real-line vector to model space, then [`Model::update`]
    pub fn update_from_real_line(&mut self, xs: &[f64]) -> Result<SteadyState> {
        let values = self.parameters.real_line_to_model(xs)?;
        self.update(&values)
    }

    /// Steady state for `values` without modifying this model
    pub fn evaluate(&self, values: &[f64]) -> Result<SteadyState> {
        let mut scratch = self.clone();
        scratch.update(values)
    }

    /// Sum of the free parameters' prior log densities
    pub fn log_prior(&self) -> Result<f64> {
        self.parameters.log_prior()
    }

    /// Draw a full free-parameter vector from the priors
    ///
    /// Draws outside a parameter's bounds are discarded and redrawn. The model
    /// is not modified; pass the result to [`Model::update`].
    ///
    /// # Errors
    ///
    /// `InvalidParameterDraw` if a parameter produces no in-bounds draw after
    /// repeated attempts.
    pub fn draw_from_prior<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<f64>> {
        self.parameters
            .free()
            .map(|param| {
                let (prior, bounds) = match (param.prior(), param.valuebounds()) {
                    (Some(prior), Some(bounds)) => (prior, bounds),
                    _ => return Err(ModelError::UnknownKey(param.key().to_string())),
                };
                let mut last = f64::NAN;
                for _ in 0..MAX_PRIOR_DRAWS {
                    last = prior.sample(&mut *rng)?;
                    if bounds.contains(last) {
                        return Ok(last);
                    }
                }
                Err(ModelError::InvalidParameterDraw {
                    quantity: param.key().to_string(),
                    value: last,
                })
            })
            .collect()
    }
}

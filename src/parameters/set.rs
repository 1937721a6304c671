//! The parameter set
//!
//! An ordered collection of estimable and steady-state parameters with an
//! O(1) key index. Declaration order is significant: bulk updates take their
//! values in the declared order of the free (non-fixed) parameters.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::parameters::parameter::{Parameter, ParameterLike};
use crate::steady_state::SteadyState;

/// Ordered parameters plus a key → position map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Parameter>", into = "Vec<Parameter>")]
pub struct ParameterSet {
    params: Vec<Parameter>,
    keys: HashMap<String, usize>,
}

impl ParameterSet {
    /// Create a new empty parameter set
    ///
    /// # Examples
    ///
    /// ```
    /// use dsge_core::parameters::ParameterSet;
    ///
    /// let params = ParameterSet::new();
    /// assert!(params.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    ///
    /// # Errors
    ///
    /// `DuplicateKey` if any parameter of either kind already uses the key.
    pub fn add_parameter(&mut self, param: Parameter) -> Result<()> {
        if self.keys.contains_key(param.key()) {
            return Err(ModelError::DuplicateKey(param.key().to_string()));
        }
        param.validate()?;

        self.keys.insert(param.key().to_string(), self.params.len());
        self.params.push(param);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// Position of `key` in declaration order
    pub fn position(&self, key: &str) -> Option<usize> {
        self.keys.get(key).copied()
    }

    pub fn get(&self, key: &str) -> Option<&Parameter> {
        self.position(key).map(|i| &self.params[i])
    }

    fn get_mut(&mut self, key: &str) -> Result<&mut Parameter> {
        match self.keys.get(key) {
            Some(&i) => Ok(&mut self.params[i]),
            None => Err(ModelError::UnknownKey(key.to_string())),
        }
    }

    /// Equation-space value of an estimable parameter, or the current value of a
    /// steady-state quantity
    ///
    /// This is the lookup surface used by the equilibrium-condition and
    /// measurement-equation builders.
    pub fn value_of(&self, key: &str) -> Result<f64> {
        self.get(key)
            .map(Parameter::scaled_value)
            .ok_or_else(|| ModelError::UnknownKey(key.to_string()))
    }

    /// Set a single parameter through its validated path
    pub fn set_value(&mut self, key: &str, value: f64) -> Result<()> {
        self.get_mut(key)?.set_value(value)
    }

    /// Set a fixed parameter; only for sub-specification construction
    pub fn override_value(&mut self, key: &str, value: f64) -> Result<()> {
        self.get_mut(key)?.override_value(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter()
    }

    /// Free parameters in declaration order
    pub fn free(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter().filter(|p| !p.is_fixed())
    }

    pub fn free_keys(&self) -> Vec<&str> {
        self.free().map(|p| p.key()).collect()
    }

    pub fn free_values(&self) -> Vec<f64> {
        self.free().map(|p| p.value()).collect()
    }

    pub fn n_free(&self) -> usize {
        self.free().count()
    }

    /// Steady-state quantities in declaration order
    pub fn steady_states(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter().filter(|p| p.is_steady_state())
    }

    /// Apply a full vector of free-parameter values
    ///
    /// Either every value is applied or none is: the update runs on a copy that
    /// replaces `self` only once all values have passed validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsge_core::parameters::{Interval, Parameter, ParameterSet, Prior};
    ///
    /// let mut params = ParameterSet::new();
    /// for key in ["a", "b"] {
    ///     let p = Parameter::builder(key, 0.5)
    ///         .bounds(Interval::new(0.0, 1.0).unwrap())
    ///         .prior(Prior::Uniform { lower: 0.0, upper: 1.0 })
    ///         .build()
    ///         .unwrap();
    ///     params.add_parameter(p).unwrap();
    /// }
    ///
    /// assert!(params.update(&[0.2, 1.2]).is_err());
    /// assert_eq!(params.free_values(), vec![0.5, 0.5]);
    ///
    /// params.update(&[0.2, 0.8]).unwrap();
    /// assert_eq!(params.free_values(), vec![0.2, 0.8]);
    /// ```
    pub fn update(&mut self, values: &[f64]) -> Result<()> {
        let free: Vec<usize> = self.free_positions();
        if values.len() != free.len() {
            return Err(ModelError::DimensionMismatch {
                expected: free.len(),
                actual: values.len(),
            });
        }

        let mut staged = self.params.clone();
        for (&i, &value) in free.iter().zip(values) {
            staged[i].set_value(value)?;
        }

        self.params = staged;
        Ok(())
    }

    /// Free-parameter values mapped to the real line
    pub fn to_real_line(&self) -> Result<Vec<f64>> {
        self.free().map(Parameter::to_real_line).collect()
    }

    /// Map a real-line vector to model space and apply it atomically
    pub fn update_from_real_line(&mut self, xs: &[f64]) -> Result<()> {
        let values = self.real_line_to_model(xs)?;
        self.update(&values)
    }

    /// Model-space values for a real-line vector, without applying them
    pub fn real_line_to_model(&self, xs: &[f64]) -> Result<Vec<f64>> {
        let n_free = self.n_free();
        if xs.len() != n_free {
            return Err(ModelError::DimensionMismatch {
                expected: n_free,
                actual: xs.len(),
            });
        }

        self.free()
            .zip(xs)
            .map(|(p, &x)| p.from_real_line(x))
            .collect()
    }

    /// Sum of the free parameters' prior log densities
    ///
    /// `-∞` if any free value is outside its bounds.
    pub fn log_prior(&self) -> Result<f64> {
        let mut total = 0.0;
        for p in self.free() {
            let in_bounds = p.valuebounds().map_or(true, |b| b.contains(p.value()));
            if !in_bounds {
                return Ok(f64::NEG_INFINITY);
            }
            if let Some(prior) = p.prior() {
                total += prior.log_pdf(p.value())?;
            }
        }
        Ok(total)
    }

    /// Write every solved quantity into its steady-state parameter
    pub fn assign_steady_state(&mut self, steady_state: &SteadyState) -> Result<()> {
        for (key, value) in steady_state.entries() {
            self.get_mut(key)?.assign_steady_state(value)?;
        }
        Ok(())
    }

    fn free_positions(&self) -> Vec<usize> {
        self.params
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_fixed())
            .map(|(i, _)| i)
            .collect()
    }

    /// Serialize the parameter set to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a parameter set, re-checking every invariant
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save the parameter set to a JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load a parameter set from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl TryFrom<Vec<Parameter>> for ParameterSet {
    type Error = ModelError;

    fn try_from(params: Vec<Parameter>) -> Result<Self> {
        let mut set = ParameterSet::new();
        for param in params {
            set.add_parameter(param)?;
        }
        Ok(set)
    }
}

impl From<ParameterSet> for Vec<Parameter> {
    fn from(set: ParameterSet) -> Self {
        set.params
    }
}

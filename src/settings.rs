//! Model settings and file-backed configuration
//!
//! [`Settings`] holds metadata consumed by collaborators outside this crate
//! (sampler block counts, forecast switches). [`ModelConfig`] is what a
//! [`Model`](crate::model::Model) is built from and can be read from JSON.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::steady_state::SolverOptions;

/// Value of a setting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SettingValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value; integers are widened
    pub fn as_float(&self) -> Option<f64> {
        match self {
            SettingValue::Float(x) => Some(*x),
            SettingValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(b) => write!(f, "{}", b),
            SettingValue::Int(i) => write!(f, "{}", i),
            SettingValue::Float(x) => write!(f, "{}", x),
            SettingValue::Text(s) => f.write_str(s),
        }
    }
}

/// A named setting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: SettingValue,
    pub description: String,
}

impl Setting {
    pub fn new(key: &str, value: SettingValue, description: &str) -> Self {
        Self {
            key: key.to_string(),
            value,
            description: description.to_string(),
        }
    }
}

/// Settings keyed by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    settings: BTreeMap<String, Setting>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// The settings every model starts with
    pub fn defaults() -> Self {
        let mut settings = Self::new();
        let defaults = [
            Setting::new(
                "n_mh_blocks",
                SettingValue::Int(1),
                "Number of blocks for Metropolis-Hastings",
            ),
            Setting::new(
                "mh_cc",
                SettingValue::Float(0.09),
                "Jump size for Metropolis-Hastings",
            ),
            Setting::new(
                "use_population_forecast",
                SettingValue::Bool(true),
                "Whether to use population forecasts as data",
            ),
            Setting::new(
                "reoptimize",
                SettingValue::Bool(true),
                "Whether to reoptimize the posterior mode",
            ),
        ];
        for setting in defaults {
            settings.settings.insert(setting.key.clone(), setting);
        }
        settings
    }

    /// Add a new setting
    ///
    /// # Errors
    ///
    /// `DuplicateKey` if a setting with the same key exists; use
    /// [`Settings::set`] to change an existing value.
    pub fn add_setting(&mut self, setting: Setting) -> Result<()> {
        if self.settings.contains_key(&setting.key) {
            return Err(ModelError::DuplicateKey(setting.key));
        }
        self.settings.insert(setting.key.clone(), setting);
        Ok(())
    }

    /// Replace the value of an existing setting
    pub fn set(&mut self, key: &str, value: SettingValue) -> Result<()> {
        match self.settings.get_mut(key) {
            Some(setting) => {
                setting.value = value;
                Ok(())
            }
            None => Err(ModelError::UnknownKey(key.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Setting> {
        self.settings.get(key)
    }

    pub fn value(&self, key: &str) -> Option<&SettingValue> {
        self.get(key).map(|s| &s.value)
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Settings in key order
    pub fn iter(&self) -> impl Iterator<Item = &Setting> {
        self.settings.values()
    }
}

fn default_n_sectors() -> i64 {
    1
}

fn default_subspec() -> String {
    "ss0".to_string()
}

/// Everything needed to construct a model instance
///
/// Missing JSON fields take their defaults.
///
/// # Examples
///
/// ```
/// use dsge_core::settings::{ModelConfig, SettingValue};
///
/// let config = ModelConfig::from_json(r#"{ "n_sectors": 3, "settings": { "n_mh_blocks": 4 } }"#).unwrap();
/// assert_eq!(config.n_sectors, 3);
/// assert_eq!(config.subspec, "ss0");
/// assert_eq!(config.settings["n_mh_blocks"], SettingValue::Int(4));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Number of productive sectors
    #[serde(default = "default_n_sectors")]
    pub n_sectors: i64,

    /// Sub-specification identifier
    #[serde(default = "default_subspec")]
    pub subspec: String,

    /// Root-finding controls for the steady-state solve
    #[serde(default)]
    pub solver: SolverOptions,

    /// Values replacing the default settings
    #[serde(default)]
    pub settings: BTreeMap<String, SettingValue>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            n_sectors: default_n_sectors(),
            subspec: default_subspec(),
            solver: SolverOptions::default(),
            settings: BTreeMap::new(),
        }
    }
}

impl ModelConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Default settings with this configuration's overrides applied
    pub(crate) fn resolve_settings(&self) -> Result<Settings> {
        let mut settings = Settings::defaults();
        for (key, value) in &self.settings {
            settings.set(key, value.clone())?;
        }
        Ok(settings)
    }
}

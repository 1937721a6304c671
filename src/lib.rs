//! # dsge-core
//!
//! `dsge-core` is the parameter-and-steady-state core of a structural
//! macroeconomic model with a Bernanke-Gertler-Gilchrist financial-frictions
//! block.
//!
//! The library provides:
//! - A registry of named, bounded parameters with exact real-line transforms,
//!   scaling functions and priors
//! - A symbolic index registry sized by the number of productive sectors
//! - A steady-state solver combining closed-form balanced-growth algebra with a
//!   scalar root-find for the credit-spread block
//! - Independent model instances that can be evaluated in parallel
//!
//! ## Basic Usage
//!
//! ```
//! use dsge_core::settings::ModelConfig;
//! use dsge_core::Model;
//!
//! let mut model = Model::new(ModelConfig::default()).unwrap();
//!
//! // Move every free parameter through the real line and back
//! let xs = model.parameters().to_real_line().unwrap();
//! let steady_state = model.update_from_real_line(&xs).unwrap();
//!
//! assert!(steady_state.cstar > 0.0);
//! assert_eq!(model.value_of("cstar").unwrap(), steady_state.cstar);
//! ```

// Public modules
pub mod error;

// Parameter system
pub mod parameters;

pub mod indices;
pub mod model;
pub mod models;
pub mod parallel;
pub mod settings;
pub mod steady_state;

// Re-exports for convenience
pub use error::{ModelError, Result};
pub use indices::{IndexCategory, IndexRegistry};
pub use model::Model;
pub use parameters::ParameterSet;
pub use settings::ModelConfig;
pub use steady_state::{SolverOptions, SteadyState};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

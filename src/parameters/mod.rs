//! # Parameter System
//!
//! This module provides the named, bounded, transformable parameters of a
//! structural model and the collection that resolves them by key.
//!
//! ## Key Features
//!
//! - **Three parameter kinds**: unscaled and scaled estimable parameters, and
//!   steady-state quantities written by the solver
//! - **Real-line transforms**: Untransformed, SquareRoot and Exponential
//!   bijections for unconstrained optimization and sampling
//! - **Atomic bulk updates**: a full vector of free values is applied all at
//!   once or not at all
//! - **Priors**: densities and draws for every free parameter, with the RNG
//!   supplied by the caller
//!
//! ## Example Usage
//!
//! ```rust
//! use dsge_core::parameters::{Interval, Parameter, ParameterSet, Prior, Scaling, Transform};
//!
//! let mut params = ParameterSet::new();
//!
//! let bounds = Interval::new(1e-5, 10.0).unwrap();
//! params
//!     .add_parameter(
//!         Parameter::builder("β", 0.1402)
//!             .bounds(bounds)
//!             .transform(Transform::Exponential, bounds)
//!             .prior(Prior::Gamma { mean: 0.25, std: 0.1 })
//!             .scaling(Scaling::DiscountFactor)
//!             .build()
//!             .unwrap(),
//!     )
//!     .unwrap();
//!
//! // Equation-space value
//! let beta = params.value_of("β").unwrap();
//! assert!(beta < 1.0);
//!
//! // Move through the real line and back
//! let xs = params.to_real_line().unwrap();
//! params.update_from_real_line(&xs).unwrap();
//! ```

pub mod bounds;
pub mod parameter;
pub mod prior;
pub mod scaling;
pub mod set;

// Re-export key types
pub use bounds::{Interval, Transform};
pub use parameter::{Parameter, ParameterBuilder, ParameterLike, SteadyStateParameter};
pub use prior::Prior;
pub use scaling::Scaling;
pub use set::ParameterSet;

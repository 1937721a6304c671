//! Model definitions
//!
//! The parameter list of each model specification and the sub-specifications
//! that adjust it.

pub mod financial_frictions;
pub mod subspecs;

pub use financial_frictions::SPEC;
pub use subspecs::SUBSPECS;

//! Sub-specifications
//!
//! A sub-specification is the baseline parameter list with some calibrated
//! values changed. Changes go through the override path, which is the only
//! way to move a fixed parameter.

use log::debug;

use crate::error::{ModelError, Result};
use crate::parameters::ParameterSet;

/// Known sub-specification identifiers
pub const SUBSPECS: [&str; 2] = ["ss0", "ss1"];

/// Apply sub-specification `subspec` to a baseline parameter set
///
/// - `ss0`: baseline, no changes
/// - `ss1`: higher default probability (`Fω = 0.05`) and government share
///   (`g_star = 0.20`)
///
/// # Errors
///
/// `UnknownSubspec` for any other identifier.
pub fn apply(subspec: &str, params: &mut ParameterSet) -> Result<()> {
    match subspec {
        "ss0" => Ok(()),
        "ss1" => {
            debug!("applying sub-specification ss1");
            params.override_value("Fω", 0.05)?;
            params.override_value("g_star", 0.20)?;
            Ok(())
        }
        other => Err(ModelError::UnknownSubspec(other.to_string())),
    }
}

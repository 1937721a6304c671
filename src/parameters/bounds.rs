//! Parameter bounds and real-line transforms
//!
//! This module provides the closed intervals used for parameter value bounds and
//! the three bijections that move a bounded parameter between model space and
//! the unconstrained real line. Optimizers and samplers work on the real line;
//! the model only ever sees values inside the bounds.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Slack on the centred SquareRoot argument. Values on the transform
/// interval's edge (or a rounding error past it) are pulled inside by this
/// much so the real-line image stays finite.
const EDGE_NUDGE: f64 = 1e-12;

/// A closed interval `[lower, upper]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower end of the interval (inclusive)
    pub lower: f64,

    /// Upper end of the interval (inclusive)
    pub upper: f64,
}

// JSON has no infinities: open ends are written as null.
impl Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let finite = |x: f64| if x.is_finite() { Some(x) } else { None };
        let mut state = serializer.serialize_struct("Interval", 2)?;
        state.serialize_field("lower", &finite(self.lower))?;
        state.serialize_field("upper", &finite(self.upper))?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct IntervalHelper {
            #[serde(default)]
            lower: Option<f64>,

            #[serde(default)]
            upper: Option<f64>,
        }

        let helper = IntervalHelper::deserialize(deserializer)?;
        Interval::new(
            helper.lower.unwrap_or(f64::NEG_INFINITY),
            helper.upper.unwrap_or(f64::INFINITY),
        )
        .map_err(serde::de::Error::custom)
    }
}

impl Interval {
    /// Create a new interval
    ///
    /// # Returns
    ///
    /// A new `Interval` if `lower <= upper` and neither end is NaN, or an
    /// `InvalidDefinition` error otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use dsge_core::parameters::bounds::Interval;
    ///
    /// let bounds = Interval::new(0.0, 1.0).unwrap();
    /// assert!(bounds.contains(0.5));
    /// assert!(Interval::new(1.0, 0.0).is_err());
    /// ```
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(ModelError::InvalidDefinition(format!(
                "interval lower end ({}) must not exceed upper end ({})",
                lower, upper
            )));
        }

        Ok(Self { lower, upper })
    }

    /// The whole real line
    pub fn unbounded() -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }

    /// Check if a value is within the interval (both ends inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Width of the interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Midpoint of the interval
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Fail with `OutOfBounds` unless `value` lies inside the interval
    pub(crate) fn check(&self, key: &str, value: f64) -> Result<()> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(ModelError::OutOfBounds {
                key: key.to_string(),
                value,
                lower: self.lower,
                upper: self.upper,
            })
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// The bijection used to move a parameter between model space and the real line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Transform {
    /// Real-line value equals model-space value
    #[default]
    Untransformed,

    /// Algebraic squashing of a finite interval onto the real line
    SquareRoot,

    /// Logarithmic map of a lower-bounded interval onto the real line
    Exponential,
}

impl Transform {
    /// Map a model-space value to the real line
    ///
    /// `bounds` are the parameter's value bounds; `params` is the auxiliary
    /// interval `(a, b)` consumed by the transform itself.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if the value lies outside `bounds`, or outside the domain
    /// of the transform; `InvalidInput` if the value is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsge_core::parameters::bounds::{Interval, Transform};
    ///
    /// let bounds = Interval::new(1e-5, 0.999).unwrap();
    /// let x = Transform::SquareRoot.to_real("ζ_p", 0.894, &bounds, &bounds).unwrap();
    /// let back = Transform::SquareRoot.to_bounded("ζ_p", x, &bounds, &bounds).unwrap();
    /// assert!((back - 0.894).abs() < 1e-12);
    /// ```
    pub fn to_real(self, key: &str, value: f64, bounds: &Interval, params: &Interval) -> Result<f64> {
        if !value.is_finite() {
            return Err(ModelError::InvalidInput(format!(
                "non-finite model-space value {} for '{}'",
                value, key
            )));
        }
        bounds.check(key, value)?;

        match self {
            Transform::Untransformed => Ok(value),
            Transform::SquareRoot => {
                let cx = 2.0 * (value - params.midpoint()) / params.width();
                if cx.abs() > 1.0 + EDGE_NUDGE || !cx.is_finite() {
                    return Err(ModelError::OutOfBounds {
                        key: key.to_string(),
                        value,
                        lower: params.lower,
                        upper: params.upper,
                    });
                }
                let cx = cx.clamp(-1.0 + EDGE_NUDGE, 1.0 - EDGE_NUDGE);
                Ok(cx / (1.0 - cx * cx).sqrt())
            }
            Transform::Exponential => {
                let shifted = value - params.lower;
                if shifted < 0.0 {
                    return Err(ModelError::OutOfBounds {
                        key: key.to_string(),
                        value,
                        lower: params.lower,
                        upper: f64::INFINITY,
                    });
                }
                Ok(params.upper + shifted.max(f64::MIN_POSITIVE).ln())
            }
        }
    }

    /// Map a real-line value back to model space
    ///
    /// This is the exact inverse of [`Transform::to_real`] on the interior of
    /// the bounds. The result is never outside `bounds`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `real` is not finite.
    pub fn to_bounded(self, key: &str, real: f64, bounds: &Interval, params: &Interval) -> Result<f64> {
        if !real.is_finite() {
            return Err(ModelError::InvalidInput(format!(
                "non-finite real-line value {} for '{}'",
                real, key
            )));
        }

        let value = match self {
            Transform::Untransformed => real,
            Transform::SquareRoot => params.midpoint() + params.width() / 2.0 * real / 1f64.hypot(real),
            Transform::Exponential => params.lower + (real - params.upper).exp(),
        };

        // Rounding at the edges can step a hair outside the interval.
        Ok(value.clamp(bounds.lower, bounds.upper))
    }
}

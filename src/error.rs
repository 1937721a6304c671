use thiserror::Error;

/// Error types for the dsge-core library.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A value lies outside the closed interval a parameter or transform accepts.
    #[error("Value {value} for '{key}' is outside bounds [{lower}, {upper}]")]
    OutOfBounds {
        key: String,
        value: f64,
        lower: f64,
        upper: f64,
    },

    /// Attempt to mutate a fixed parameter outside the override path.
    #[error("Parameter '{key}' is fixed and cannot be set during estimation")]
    FixedParameterViolation { key: String },

    /// The number of productive sectors must be at least one.
    #[error("Invalid structural dimension: {0} (need at least one sector)")]
    InvalidDimension(i64),

    /// The closed-form steady-state algebra produced a non-finite quantity.
    #[error("Invalid parameter draw: steady-state quantity '{quantity}' evaluated to {value}")]
    InvalidParameterDraw { quantity: String, value: f64 },

    /// Non-finite or otherwise unusable input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Two parameters (of either kind) share a key.
    #[error("Duplicate parameter key: {0}")]
    DuplicateKey(String),

    /// No parameter or setting with this key exists.
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// No entry with this name exists in the index category.
    #[error("No index named '{name}' in {category}")]
    UnknownIndex { category: String, name: String },

    /// A parameter or bounds declaration is malformed.
    #[error("Invalid definition: {0}")]
    InvalidDefinition(String),

    /// A bulk update vector has the wrong length.
    #[error("Dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The elasticity block produced a non-finite value from a consistent
    /// threshold/dispersion pair.
    #[error("Steady-state defect: {0}")]
    SteadyStateDefect(String),

    /// The requested sub-specification does not exist.
    #[error("Unknown sub-specification: {0}")]
    UnknownSubspec(String),

    /// I/O error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    /// Whether an enclosing sampler should reject the draw rather than abort.
    pub fn is_rejectable_draw(&self) -> bool {
        matches!(
            self,
            ModelError::OutOfBounds { .. } | ModelError::InvalidParameterDraw { .. }
        )
    }
}

/// Result type alias for dsge-core operations.
pub type Result<T> = std::result::Result<T, ModelError>;

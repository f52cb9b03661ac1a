use thiserror::Error;

/// Inputs that were supplied but do not fit together.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("the number of cell types and densities must be the same (got {types} types and {densities} densities)")]
    LengthMismatch { types: usize, densities: usize },
    #[error("invalid plan: {0}")]
    InvalidPlan(String),
    #[error("the mix asks for more than {max} units (at {unit_type}, density {density})")]
    TooManyUnits {
        unit_type: String,
        density: f64,
        max: usize,
    },
}

/// Reasons a node produced no output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NodeError {
    /// A required input was not supplied. Not reported to the user.
    #[error("required input `{0}` was not supplied")]
    InputMissing(&'static str),
    /// Reported to the user as a single warning.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

//! Error type for input validation at the simulation boundary.

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised by malformed input. Gameplay refusals are outcomes, not errors.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// Tick called with a negative or non-finite step.
    #[error("invalid time step: {0}")]
    InvalidTimeStep(f64),

    /// Position is non-finite or too close to a pole.
    #[error("invalid position: ({lat}, {lng})")]
    InvalidPosition { lat: f64, lng: f64 },

    /// Speed is negative or non-finite.
    #[error("invalid speed: {0}")]
    InvalidSpeed(f64),

    /// Heading is non-finite.
    #[error("invalid heading: {0}")]
    InvalidHeading(f64),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Command or config JSON could not be parsed.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

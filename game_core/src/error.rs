use thiserror::Error;

/// Errors raised by the physics core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// normalize / set_magnitude / reflect on a zero-length (or non-finite) vector
    #[error("degenerate vector: magnitude is zero or not finite")]
    DegenerateVector,

    #[error("division of a vector by zero")]
    DivisionByZero,

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("could not parse configuration: {0}")]
    ConfigParse(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::ConfigParse(e.to_string())
    }
}

use thiserror::Error;

/// Errors raised around the model: configuration, input validation and output.
///
/// The model update itself is total and never produces one of these.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Invalid model constants: {0}")]
    InvalidConstants(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid panel input: {0}")]
    InvalidInput(#[from] validator::ValidationErrors),

    #[error("Non-finite panel input: {0}")]
    NonFinite(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for SimError {
    fn from(error: figment::Error) -> Self {
        SimError::Config(Box::new(error))
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SimError::InvalidConstants("fan_coefficient must be finite".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid model constants: fan_coefficient must be finite"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SimError = io.into();
        assert!(matches!(err, SimError::Io(_)));
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BacError {
    #[error("Invalid profile: {field} {reason}")]
    InvalidProfile { field: &'static str, reason: String },

    #[error("Unsupported sex: '{0}' (expected 'female' or 'male')")]
    UnsupportedSex(String),

    #[error("Invalid intake: {reason}")]
    InvalidIntake { reason: String },

    #[error("No intakes to simulate")]
    EmptyIntakes,

    #[error("{phase} did not converge within {steps} steps")]
    NotConverged { phase: &'static str, steps: usize },

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, BacError>;

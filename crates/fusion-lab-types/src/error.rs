use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid confinement time: tau must be nonzero")]
    InvalidConfinementTime,

    #[error("Empty parameter range: {0}")]
    EmptyRange(&'static str),

    #[error("No finite energy output over the scan grid")]
    NoFiniteObjective,

    #[error("Unknown sweep parameter: {0}")]
    UnknownParameter(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;

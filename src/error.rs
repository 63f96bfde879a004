use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelicScoreError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown formula variant '{0}'")]
    UnknownVariant(String),

    #[error("Invalid formula variant: {0}")]
    InvalidVariant(String),

    #[error("Malformed stat value '{0}'")]
    MalformedValue(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type RsResult<T> = Result<T, RelicScoreError>;

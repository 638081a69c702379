use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed item {index}: {reason}")]
    InvalidSeed { index: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

use thiserror::Error;

/// Errors surfaced while constructing or configuring a cavity run.
#[derive(Debug, Error)]
pub enum CavityError {
    #[error("grid size must be at least 3 points per side, got {n}")]
    GridTooSmall { n: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unknown backend: {0} (expected serial or parallel)")]
    UnknownBackend(String),

    #[error("config parse error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CavityError>;

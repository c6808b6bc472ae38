use thiserror::Error;

/// Errors raised while building a reference catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Invalid normal spread for {instrument}: {value}")]
    InvalidSpread { instrument: String, value: f64 },

    #[error("Instrument listed twice: {0}")]
    DuplicateInstrument(String),

    #[error("Unknown instrument group: {0}")]
    UnknownGroup(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

/// Errors raised by quote feeds.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Feed I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed quote on line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

use thiserror::Error;

/// Daily tip error types
#[derive(Error, Debug)]
pub enum TipError {
    /// A poison stand-in was exercised because a pipeline slot was never set
    #[error("Configuration error: {0} used before it was configured")]
    Configuration(String),

    #[error("Load error: {0}")]
    Load(String),

    #[error("Selection error: {0}")]
    Selection(String),

    #[error("Unknown collection(s): {}", .0.join(", "))]
    UnknownCollections(Vec<String>),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for daily tip operations
pub type Result<T> = std::result::Result<T, TipError>;

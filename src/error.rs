use std::path::PathBuf;

/// Errors raised while building a board or a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board radius cannot be negative (got {0})")]
    NegativeRadius(i32),

    #[error("invalid cube coordinate ({q}, {r}, {s}): components must sum to 0")]
    InvalidCoordinate { q: i32, r: i32, s: i32 },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid log level '{0}'")]
    Level(String),

    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

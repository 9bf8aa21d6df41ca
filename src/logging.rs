use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::LoggingError;

/// Install the global log subscriber described by `config`.
///
/// Logs are appended to `config.file`; `RUST_LOG` directives, if set, refine
/// the configured level. Returns `false` without installing anything when no
/// file is configured.
pub fn init_logging(config: &LoggingConfig) -> Result<bool, LoggingError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let level: LevelFilter = config
        .level
        .parse()
        .map_err(|_| LoggingError::Level(config.level.clone()))?;
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggingError::LogFile {
            path: path.clone(),
            source: e,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    Ok(true)
}

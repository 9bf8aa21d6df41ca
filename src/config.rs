use std::path::{Path, PathBuf};

use tracing::level_filters::LevelFilter;

use crate::error::ConfigError;
use crate::game::Player;

/// Largest radius the terminal board can draw.
pub const MAX_RADIUS: i32 = 12;

/// Board and opening settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub radius: i32,
    pub starting_player: Player,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            radius: 5,
            starting_player: Player::Red,
        }
    }
}

/// Where and how verbosely to log. Without a file nothing is logged, since
/// the terminal UI owns the screen.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Highlight opponent stones the current player can capture.
    pub show_capturable: bool,
    /// Mark every empty cell the current player may place on.
    pub show_legal_moves: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_capturable: true,
            show_legal_moves: false,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.radius < 0 {
            return Err(ConfigError::Validation(
                "board.radius must be >= 0".into(),
            ));
        }
        if self.board.radius > MAX_RADIUS {
            return Err(ConfigError::Validation(format!(
                "board.radius must be <= {MAX_RADIUS}"
            )));
        }
        if self.logging.level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of off, error, warn, info, debug, trace",
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Dimensions, DEFAULT_COLS, DEFAULT_ROWS};

/// Largest board side the terminal view will draw.
pub const MAX_DIMENSION: usize = 16;

/// Board size, fixed once a game starts.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl BoardConfig {
    pub fn dimensions(&self) -> Result<Dimensions, ConfigError> {
        Dimensions::new(self.rows, self.cols)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the selector starts on; the middle column when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_column: Option<usize>,
    pub show_column_numbers: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            start_column: None,
            show_column_numbers: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
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
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = self.board.dimensions()?;
        if dims.rows() > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.rows must be <= {MAX_DIMENSION}"
            )));
        }
        if dims.cols() > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.cols must be <= {MAX_DIMENSION}"
            )));
        }
        if let Some(col) = self.ui.start_column {
            if col >= dims.cols() {
                return Err(ConfigError::Validation(
                    "ui.start_column must be < board.cols".into(),
                ));
            }
        }
        Ok(())
    }

    /// Column the selector starts on.
    pub fn start_column(&self) -> usize {
        self.ui.start_column.unwrap_or(self.board.cols / 2)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

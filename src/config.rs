use std::path::Path;

use log::warn;

use crate::ai::{Contestant, Difficulty, GameMode};
use crate::error::ConfigError;

/// Deepest search the configuration accepts.
pub const MAX_DEPTH: usize = 10;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

/// Who plays and how hard the computer thinks.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Overrides the difficulty's search depth when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
}

impl GameConfig {
    /// Effective search depth
    pub fn depth(&self) -> usize {
        self.depth.unwrap_or_else(|| self.difficulty.depth())
    }

    pub fn contestants(&self) -> [Contestant; 2] {
        self.mode.contestants(self.depth())
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Pause before a computer move is applied, in milliseconds.
    pub ai_delay_ms: u64,
    /// Play on plain stdin/stdout instead of the terminal UI.
    pub console: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            ai_delay_ms: 300,
            console: false,
        }
    }
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
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(depth) = self.game.depth {
            if !(1..=MAX_DEPTH).contains(&depth) {
                return Err(ConfigError::Validation(format!(
                    "game.depth must be in 1..={MAX_DEPTH}, got {depth}"
                )));
            }
        }
        if self.ui.ai_delay_ms > 10_000 {
            return Err(ConfigError::Validation(
                "ui.ai_delay_ms must be <= 10000".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

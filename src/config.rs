//! User configuration persistence
//!
//! Stores user preferences in `~/.config/glint/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::reveal::RevealConfig;

/// Configuration shared by every glint command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlintConfig {
    /// Selected theme id (e.g., "dark", "light", or a user theme)
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Language hint used when none is given and none can be inferred
    #[serde(default = "default_language")]
    pub default_language: String,

    #[serde(default)]
    pub reveal: RevealConfig,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_language() -> String {
    "text".to_string()
}

impl Default for GlintConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            default_language: default_language(),
            reveal: RevealConfig::default(),
        }
    }
}

impl GlintConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`. Missing or invalid files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            crate::config_paths::ensure_dir(parent)?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

use crate::api::DEFAULT_BASE_URL;
use crate::keymap::Keymap;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure, stored as `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the account API (default: http://localhost:3000)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Color theme
    #[serde(default)]
    pub theme: ThemeType,
    /// Keyboard bindings
    #[serde(default)]
    pub keymap: Keymap,
    /// Start with the two demo alarms in the list (default: true)
    #[serde(default = "default_seed_sample_alarms")]
    pub seed_sample_alarms: bool,
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_seed_sample_alarms() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            theme: ThemeType::default(),
            keymap: Keymap::default(),
            seed_sample_alarms: default_seed_sample_alarms(),
        }
    }
}

impl Config {
    /// Load configuration from file, or write and return the default
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let mut config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

            if config.api_base_url.trim().is_empty() {
                config.api_base_url = default_api_base_url();
            }

            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // 600: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(config_path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }
}

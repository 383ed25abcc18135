use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::changelog::DEFAULT_CHANGELOG;
use crate::domain::DEFAULT_FALLBACK_MESSAGE;
use crate::error::Result;
use crate::ui::ColorMode;

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "gtauto.toml";

/// Config file looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".gtauto.toml";

/// Represents the complete configuration for gtauto.
///
/// Contains the changelog location, tag message settings, and behavior options.
/// Every key is optional; missing keys take their defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub tag: TagConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default changelog path.
fn default_changelog_path() -> PathBuf {
    PathBuf::from(DEFAULT_CHANGELOG)
}

/// Returns the default fallback tag message template.
fn default_fallback_message() -> String {
    DEFAULT_FALLBACK_MESSAGE.to_string()
}

/// Returns the default remote named in push instructions.
fn default_remote() -> String {
    "origin".to_string()
}

fn default_true() -> bool {
    true
}

/// Where the changelog lives.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_path")]
    pub path: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            path: default_changelog_path(),
        }
    }
}

/// Configuration for tag creation.
///
/// `fallback_message` is used when the changelog has no section for the tag;
/// `{tag}` is replaced with the tag name.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagConfig {
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,

    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            fallback_message: default_fallback_message(),
            remote: default_remote(),
        }
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub color: ColorMode,

    /// Ask before replacing an existing tag
    #[serde(default = "default_true")]
    pub confirm_overwrite: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            color: ColorMode::default(),
            confirm_overwrite: true,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gtauto.toml` in current directory
/// 3. `.gtauto.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from TOML text.
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = toml::from_str(text)?;
    Ok(config)
}

//! Configuration module for taginput
//!
//! Holds the options a tag input is constructed with. Configuration is stored
//! as TOML in the user's config directory and can be overridden from the
//! command line.

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::tags::{SeedTag, TagInputOptions};
use crate::validation::{ValidationMode, Validator};
use crate::TagInputError;

fn default_add_tag_on_keys() -> Vec<String> {
    vec!["enter".to_string(), ",".to_string(), "tab".to_string()]
}

/// Tag input configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TagInputConfig {
    /// Initial tags; numbers are accepted and become strings
    #[serde(default)]
    pub tags: Vec<SeedTag>,

    /// Permit repeated tags
    #[serde(default)]
    pub allow_duplicates: bool,

    /// Disable editing entirely
    #[serde(default)]
    pub read_only: bool,

    /// Built-in validation shape
    #[serde(default)]
    pub validate: ValidationMode,

    /// Custom validation regex, takes precedence over `validate`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Maximum number of tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Placeholder shown in the empty input
    #[serde(default)]
    pub placeholder: String,

    /// Keys that commit the pending entry ("enter", "tab", "space" or a single character)
    #[serde(default = "default_add_tag_on_keys")]
    pub add_tag_on_keys: Vec<String>,

    /// Commit the pending entry when the input loses focus
    #[serde(default)]
    pub add_tag_on_blur: bool,
}

impl Default for TagInputConfig {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            allow_duplicates: false,
            read_only: false,
            validate: ValidationMode::None,
            pattern: None,
            limit: None,
            placeholder: String::new(),
            add_tag_on_keys: default_add_tag_on_keys(),
            add_tag_on_blur: false,
        }
    }
}

impl TagInputConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("taginput").join("config.toml"))
    }

    /// Load configuration from the default location, falling back to defaults
    /// when no file exists
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("loading config from {}", path.display());
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        fs::write(path, self.to_toml()?)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))
    }

    /// Render as pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// The validator these settings select
    ///
    /// # Errors
    ///
    /// Returns `TagInputError::InvalidPattern` if `pattern` is not a valid regex.
    pub fn validator(&self) -> Result<Validator, TagInputError> {
        match &self.pattern {
            Some(pattern) => Validator::pattern(pattern),
            None => Ok(Validator::Mode(self.validate)),
        }
    }

    /// Build the options for a [`TagInput`](crate::TagInput)
    ///
    /// # Errors
    ///
    /// Returns `TagInputError::InvalidPattern` if `pattern` is not a valid regex.
    pub fn to_options(&self) -> Result<TagInputOptions, TagInputError> {
        Ok(TagInputOptions::new()
            .with_allow_duplicates(self.allow_duplicates)
            .with_read_only(self.read_only)
            .with_validator(self.validator()?)
            .with_limit(self.limit)
            .with_placeholder(self.placeholder.clone()))
    }
}

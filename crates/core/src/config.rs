//! Configuration for the intent schema builder.
//!
//! Config priority: explicit file > project-relative (.intent-schema.toml) >
//! user (~/.config/intent-schema/config.toml) > defaults

use crate::error::{Error, Result};
use crate::slot_type::{Registry, SlotTypeEntry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-relative config file name
pub const PROJECT_CONFIG_FILE: &str = ".intent-schema.toml";

/// Interactive session settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
  /// How many times a count prompt is asked before malformed input aborts the session
  pub max_attempts: u32,
}

impl Default for SessionConfig {
  fn default() -> Self {
    Self { max_attempts: 3 }
  }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  /// Default level when RUST_LOG is unset (error, warn, info, debug, trace)
  pub level: String,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: "warn".to_string(),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub session: SessionConfig,

  #[serde(default)]
  pub logging: LoggingConfig,

  /// Extra slot types offered at the slot type prompt
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub slot_types: Vec<SlotTypeEntry>,
}

impl Config {
  /// Read a specific config file; errors are reported
  pub fn from_file(path: &Path) -> Result<Self> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
      path: path.to_path_buf(),
      message: e.to_string(),
    })?;
    toml::from_str(&content).map_err(|e| Error::Config {
      path: path.to_path_buf(),
      message: e.to_string(),
    })
  }

  /// Load config for a project directory, with fallback to user config
  pub fn load_for_project(project_path: &Path) -> Self {
    let project_config = Self::project_config_path(project_path);
    if project_config.exists()
      && let Ok(config) = Self::from_file(&project_config)
    {
      return config;
    }

    if let Some(user_config_path) = Self::user_config_path()
      && user_config_path.exists()
      && let Ok(config) = Self::from_file(&user_config_path)
    {
      return config;
    }

    Self::default()
  }

  /// Get the user-level config path
  pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("INTENT_SCHEMA_CONFIG_DIR") {
      return Some(PathBuf::from(path).join("config.toml"));
    }

    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
      return Some(PathBuf::from(path).join("intent-schema").join("config.toml"));
    }

    dirs::config_dir().map(|p: PathBuf| p.join("intent-schema").join("config.toml"))
  }

  /// Get the project-relative config path
  pub fn project_config_path(project_path: &Path) -> PathBuf {
    project_path.join(PROJECT_CONFIG_FILE)
  }

  /// Slot type registry with the configured extensions applied
  pub fn registry(&self) -> Registry {
    Registry::with_extensions(self.slot_types.iter().cloned())
  }
}

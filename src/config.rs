//! Application configuration
//!
//! Read from `~/.config/dashboard-ui/config.yaml` (or a path given on the
//! command line). Every field has a default, so a partial file only
//! overrides what it names.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chart::ChartPalette;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub binder: BinderConfig,
    pub widgets: WidgetConfig,
    pub chart: ChartConfig,
}

/// Which fields become rich-text surfaces, and the strings shown to users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    /// Tag of qualifying source fields
    pub field_tag: String,
    /// Values of the `name` attribute that mark a field as rich text
    pub roles: Vec<String>,
    /// Classes marking a deferred-render region
    pub deferred_classes: Vec<String>,
    /// Id prefixes marking a deferred-render region
    pub deferred_id_prefixes: Vec<String>,
    pub placeholder: String,
    pub link_prompt: String,
    /// Pre-filled prompt answer; answering with it unchanged cancels
    pub link_placeholder: String,
    pub link_rejection: String,
    /// Keymap file merged over the embedded defaults
    pub keymap: Option<PathBuf>,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            field_tag: "textarea".to_string(),
            roles: vec!["notes".to_string(), "latest_project_updates".to_string()],
            deferred_classes: vec!["modal".to_string()],
            deferred_id_prefixes: vec!["editModal".to_string()],
            placeholder: "Enter your text here...".to_string(),
            link_prompt: "Enter the URL:".to_string(),
            link_placeholder: "https://".to_string(),
            link_rejection: "Please select the text you want to convert to a link first."
                .to_string(),
            keymap: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Meeting notes taller than this (px) start collapsed
    pub notes_max_height: u32,
    /// Minimum gap between admitted hover events on deferred regions
    pub hover_debounce_ms: u64,
    /// Delay before scrolling an expanded section's button into view
    pub scroll_delay_ms: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            notes_max_height: 500,
            hover_debounce_ms: 50,
            scroll_delay_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub palette: ChartPalette,
}

/// Errors from reading a config file
#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(serde_yaml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Failed to read {}: {}", path.display(), e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl AppConfig {
    /// Parse a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(ConfigError::Parse)
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_yaml(&content)
    }

    /// Load config from `path`, or from the user config dir when `None`.
    /// Missing or broken files fall back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match crate::config_paths::config_file() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config directory available, using defaults");
                    return Self::default();
                }
            },
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Keymap override: the configured file, else `keymap.yaml` in the user
    /// config dir
    pub fn keymap_path(&self) -> Option<PathBuf> {
        self.binder
            .keymap
            .clone()
            .or_else(crate::config_paths::keymap_file)
    }
}

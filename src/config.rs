//! Project configuration handling.
//! This module loads and writes the project configuration file that records
//! where each kind of template is placed.

use crate::constants::{CONFIG_FILES, DEFAULT_PROJECT_VERSION};
use crate::error::{Error, Result};
use crate::registry::TemplateKind;
use chrono::{SecondsFormat, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Target folder for each template kind, relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folders {
    pub components: String,
    pub hooks: String,
    pub providers: String,
    pub utils: String,
    pub constants: String,
}

impl Default for Folders {
    fn default() -> Self {
        Self {
            components: "src/components".to_string(),
            hooks: "src/hooks".to_string(),
            providers: "src/providers".to_string(),
            utils: "src/utils".to_string(),
            constants: "src/constants".to_string(),
        }
    }
}

impl Folders {
    pub fn dir_for(&self, kind: TemplateKind) -> &str {
        match kind {
            TemplateKind::Component => &self.components,
            TemplateKind::Hook => &self.hooks,
            TemplateKind::Provider => &self.providers,
            TemplateKind::Util => &self.utils,
            TemplateKind::Constant => &self.constants,
        }
    }

    /// Every folder with the kind it holds, in declaration order.
    pub fn entries(&self) -> [(TemplateKind, &str); 5] {
        [
            (TemplateKind::Component, &self.components),
            (TemplateKind::Hook, &self.hooks),
            (TemplateKind::Provider, &self.providers),
            (TemplateKind::Util, &self.utils),
            (TemplateKind::Constant, &self.constants),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub name: String,
    pub version: String,
    pub folders: Folders,
    pub created_at: String,
}

impl ProjectConfig {
    /// Default configuration for a freshly initialized project.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: DEFAULT_PROJECT_VERSION.to_string(),
            folders: Folders::default(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Returns the first existing configuration file under `project_root`.
pub fn find_config_file<P: AsRef<Path>>(project_root: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|file| project_root.as_ref().join(file))
        .find(|path| path.exists())
}

/// A directory is a mycli project when it holds a configuration file.
pub fn is_project_initialized<P: AsRef<Path>>(project_root: P) -> bool {
    find_config_file(project_root).is_some()
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither
pub fn parse_config(content: &str) -> Result<ProjectConfig> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads the project configuration.
///
/// # Errors
/// * `Error::ProjectNotInitialized` if no configuration file exists
/// * `Error::ConfigError` if the file cannot be parsed
pub fn load_config<P: AsRef<Path>>(project_root: P) -> Result<ProjectConfig> {
    let config_path = find_config_file(project_root).ok_or(Error::ProjectNotInitialized)?;
    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(&config_path)?;
    parse_config(&content)
}

/// Writes the configuration as pretty JSON and returns the written path.
pub fn write_config<P: AsRef<Path>>(project_root: P, config: &ProjectConfig) -> Result<PathBuf> {
    let config_path = project_root.as_ref().join(CONFIG_FILES[0]);
    let mut content = serde_json::to_string_pretty(config)?;
    content.push('\n');
    std::fs::write(&config_path, content)?;
    debug!("Wrote configuration to {}", config_path.display());
    Ok(config_path)
}

//! Template registry: the catalog of templates `add` can instantiate.
//! A project may ship its own `registry.json`; otherwise the registry
//! bundled with the binary is used.

use crate::constants::REGISTRY_FILE;
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Registry bundled with the binary.
const BUILTIN_REGISTRY: &str = include_str!("../registry.json");

/// Kind of source file a template produces. Decides the target folder,
/// the file extension and how the barrel file is updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Component,
    Hook,
    Provider,
    Util,
    Constant,
}

impl TemplateKind {
    /// Components and providers contain JSX.
    pub fn is_tsx(self) -> bool {
        matches!(self, TemplateKind::Component | TemplateKind::Provider)
    }

    pub fn extension(self) -> &'static str {
        if self.is_tsx() {
            "tsx"
        } else {
            "ts"
        }
    }

    pub fn barrel_file_name(self) -> &'static str {
        if self.is_tsx() {
            "index.tsx"
        } else {
            "index.ts"
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateKind::Component => "component",
            TemplateKind::Hook => "hook",
            TemplateKind::Provider => "provider",
            TemplateKind::Util => "util",
            TemplateKind::Constant => "constant",
        };
        f.write_str(name)
    }
}

/// A single registry entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    /// Display name and file stem, unique within the registry
    pub title: String,
    #[serde(rename = "type")]
    pub kind: TemplateKind,
    /// Identifier substituted for `__NAME__` and used as the import alias
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Template file relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Inline template body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default)]
    pub placeholders: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl TemplateDescriptor {
    /// File name of the generated source file, e.g. `button.tsx`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.title, self.kind.extension())
    }

    /// Relative module specifier used by the barrel, e.g. `./button`.
    pub fn import_path(&self) -> String {
        format!("./{}", self.title)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRegistry {
    pub templates: Vec<TemplateDescriptor>,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub last_updated: String,
}

impl TemplateRegistry {
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::RegistryError(format!("Invalid registry format: {e}")))
    }

    /// The registry compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_REGISTRY)
    }

    /// Finds a template by its title.
    pub fn find(&self, title: &str) -> Option<&TemplateDescriptor> {
        self.templates.iter().find(|t| t.title == title)
    }

    /// Comma separated titles, for error messages.
    pub fn titles(&self) -> String {
        self.templates
            .iter()
            .map(|t| t.title.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Loads the project-local registry if present, the built-in one otherwise.
pub fn load_registry<P: AsRef<Path>>(project_root: P) -> Result<TemplateRegistry> {
    let local = project_root.as_ref().join(REGISTRY_FILE);
    if local.is_file() {
        debug!("Loading registry from {}", local.display());
        let content = std::fs::read_to_string(&local)?;
        return TemplateRegistry::parse(&content);
    }
    debug!("Using built-in registry");
    TemplateRegistry::builtin()
}

/// Finds a template or reports the available titles.
pub fn find_template<'a>(
    registry: &'a TemplateRegistry,
    title: &str,
) -> Result<&'a TemplateDescriptor> {
    registry.find(title).ok_or_else(|| Error::TemplateNotFound {
        name: title.to_string(),
        available: registry.titles(),
    })
}

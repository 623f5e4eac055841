//! Template content store.
//! Maps a template descriptor to the raw template body, before any
//! placeholder substitution.

use crate::error::{Error, Result};
use crate::registry::TemplateDescriptor;
use log::debug;
use std::path::{Path, PathBuf};

/// Bodies bundled with the binary, keyed by template title.
const BUILTIN_TEMPLATES: [(&str, &str); 5] = [
    ("button", include_str!("../templates/components/button.tsx")),
    ("use-toggle", include_str!("../templates/hooks/use-toggle.ts")),
    (
        "auth-provider",
        include_str!("../templates/providers/auth-provider.tsx"),
    ),
    ("cn", include_str!("../templates/utils/cn.ts")),
    ("http-status", include_str!("../templates/constants/http-status.ts")),
];

/// Trait for looking up template bodies.
pub trait TemplateCatalog {
    /// Returns the raw body for `template`.
    ///
    /// # Errors
    /// * `Error::TemplateContentMissing` if no body is known for the template
    fn source(&self, template: &TemplateDescriptor) -> Result<String>;
}

/// Catalog backed by the bodies compiled into the binary.
///
/// Resolution order: the descriptor's inline `template`, the built-in body
/// for its title, then the descriptor's `path` relative to the project root.
pub struct BuiltinCatalog {
    project_root: PathBuf,
}

impl BuiltinCatalog {
    pub fn new<P: AsRef<Path>>(project_root: P) -> Self {
        Self {
            project_root: project_root.as_ref().to_path_buf(),
        }
    }

    fn builtin(title: &str) -> Option<&'static str> {
        BUILTIN_TEMPLATES
            .iter()
            .find(|(key, _)| *key == title)
            .map(|(_, body)| *body)
    }
}

impl TemplateCatalog for BuiltinCatalog {
    fn source(&self, template: &TemplateDescriptor) -> Result<String> {
        if let Some(inline) = &template.template {
            debug!("Using inline body for template {}", template.title);
            return Ok(inline.clone());
        }
        if let Some(body) = Self::builtin(&template.title) {
            debug!("Using built-in body for template {}", template.title);
            return Ok(body.to_string());
        }
        if let Some(path) = &template.path {
            let path = self.project_root.join(path);
            if path.is_file() {
                debug!("Loading template body from {}", path.display());
                return Ok(std::fs::read_to_string(path)?);
            }
        }
        Err(Error::TemplateContentMissing(template.title.clone()))
    }
}

//! `mycli init`: writes the project configuration and creates the template
//! folders with their barrel files.

use crate::config::{is_project_initialized, write_config, ProjectConfig};
use crate::console;
use crate::constants::{CONFIG_FILES, EMPTY_BARREL, PROVIDERS_BARREL};
use crate::error::{Error, Result};
use crate::registry::TemplateKind;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone)]
pub struct InitOptions {
    /// Project name, the root directory's name otherwise
    pub name: Option<String>,
    pub force: bool,
}

/// Seed content of a new barrel for `kind`.
pub fn barrel_seed(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Provider => PROVIDERS_BARREL,
        _ => EMPTY_BARREL,
    }
}

fn default_project_name(project_root: &Path) -> String {
    project_root
        .canonicalize()
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "my-project".to_string())
}

/// Creates every configured folder and seeds missing barrels.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Barrel files created by this call
pub fn create_project_directories(
    project_root: &Path,
    config: &ProjectConfig,
) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();

    for (kind, folder) in config.folders.entries() {
        let dir = project_root.join(folder);
        fs::create_dir_all(&dir)?;
        console::success(&format!("Created directory: {folder}"));

        let barrel = dir.join(kind.barrel_file_name());
        if barrel.exists() {
            console::info(&format!("File already exists: {}", barrel.display()));
            continue;
        }
        fs::write(&barrel, barrel_seed(kind))?;
        console::success(&format!("Created file: {}", barrel.display()));
        created.push(barrel);
    }

    Ok(created)
}

/// Initializes `project_root` as a mycli project.
///
/// # Errors
/// * `Error::ProjectAlreadyInitialized` if a configuration exists and
///   `force` is not set
pub fn run(project_root: &Path, options: InitOptions) -> Result<ProjectConfig> {
    if !options.force && is_project_initialized(project_root) {
        return Err(Error::ProjectAlreadyInitialized);
    }

    let project_name = options
        .name
        .unwrap_or_else(|| default_project_name(project_root));
    console::info(&format!("Initializing mycli project: {project_name}"));
    console::divider();

    let config = ProjectConfig::new(project_name);
    console::info("Creating project configuration...");
    write_config(project_root, &config)?;
    console::success(&format!("Created {}", CONFIG_FILES[0]));

    console::info("Creating project directories...");
    create_project_directories(project_root, &config)?;
    console::divider();

    console::success_box(
        "Project Initialized Successfully!",
        &format!(
            "Project \"{}\" has been initialized with:\n\n\
             • Configuration file: {}\n\
             • {} project directories\n\n\
             Next steps:\n\
             • Run \"mycli list\" to see the available templates\n\
             • Run \"mycli add button\" to add a button component\n\
             • Run \"mycli add use-toggle\" to add a toggle hook",
            config.name,
            CONFIG_FILES[0],
            config.folders.entries().len()
        ),
    );

    Ok(config)
}

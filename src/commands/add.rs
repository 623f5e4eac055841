//! `mycli add`: instantiates a registry template into the project and
//! re-exports it from the folder's barrel.

use crate::barrel::{update_index, IndexUpdate};
use crate::catalog::TemplateCatalog;
use crate::config::{is_project_initialized, load_config};
use crate::console;
use crate::error::{Error, Result};
use crate::formatter::run_prettier;
use crate::prompt::Prompter;
use crate::registry::{find_template, load_registry};
use crate::template::{generate_replacements, render_template};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct AddOptions {
    /// Registry title of the template
    pub template: String,
    /// Custom base name for placeholder values
    pub name: Option<String>,
    pub force: bool,
    /// Run Prettier on the target folder afterwards
    pub format: bool,
}

/// Result of a successful `add`.
#[derive(Debug, Clone)]
pub struct AddOutcome {
    pub file: PathBuf,
    pub index: IndexUpdate,
}

/// Decides whether `path` may be written.
///
/// # Errors
/// * `Error::FileExists` if the file exists, `force` is unset and the user
///   declines the overwrite
fn check_existing_file(path: &Path, force: bool, prompt: &dyn Prompter) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    if force {
        console::warn(&format!("Overwriting existing file: {}", path.display()));
        return Ok(());
    }
    let question = format!("{} already exists. Overwrite it?", path.display());
    if prompt.confirm(&question, false)? {
        return Ok(());
    }
    Err(Error::FileExists {
        path: path.to_path_buf(),
    })
}

/// Adds a template to the project at `project_root`.
///
/// # Flow
/// 1. Loads the configuration and the registry
/// 2. Resolves the template and its target folder
/// 3. Renders the template body and writes the file
/// 4. Updates the folder's barrel file
/// 5. Optionally formats the folder with Prettier
pub fn run(
    project_root: &Path,
    options: AddOptions,
    catalog: &dyn TemplateCatalog,
    prompt: &dyn Prompter,
) -> Result<AddOutcome> {
    if !is_project_initialized(project_root) {
        return Err(Error::ProjectNotInitialized);
    }

    let config = load_config(project_root)?;
    let registry = load_registry(project_root)?;
    let template = find_template(&registry, &options.template)?;

    let target_dir = project_root.join(config.folders.dir_for(template.kind));
    let target_path = target_dir.join(template.file_name());

    console::template_info(template, &target_path);
    check_existing_file(&target_path, options.force, prompt)?;

    let replacements = generate_replacements(template, options.name.as_deref());
    let body = catalog.source(template)?;
    let content = render_template(&body, template, &replacements);
    if !replacements.is_empty() {
        console::running(&format!(
            "Applied {} placeholder replacements",
            replacements.len()
        ));
    }

    fs::create_dir_all(&target_dir)?;
    fs::write(&target_path, content)?;
    console::success(&format!("Created: {}", target_path.display()));

    let index = update_index(template, &target_dir)?;
    if let Some(warning) = index.warning() {
        debug!("Index update finished with a warning: {warning}");
    }

    if options.format {
        console::info("Running Prettier to format code...");
        match run_prettier(&target_dir) {
            Ok(()) => console::success("Code formatted successfully"),
            Err(e) => {
                warn!("{e}");
                console::warn("Could not run Prettier. Make sure it's installed.");
                console::running("You can manually format with: npx prettier --write .");
            }
        }
    }

    let install_hint = if template.dependencies.is_empty() {
        String::new()
    } else {
        format!(
            "Don't forget to install dependencies:\nnpm install {}\n\n",
            template.dependencies.join(" ")
        )
    };
    console::success_box(
        "Template Added Successfully!",
        &format!(
            "Template \"{}\" has been added to your project.\n\nFile: {}\nType: {}\n\n{}",
            template.title,
            target_path.display(),
            template.kind,
            install_hint
        )
        .trim_end()
        .to_string(),
    );

    Ok(AddOutcome {
        file: target_path,
        index,
    })
}

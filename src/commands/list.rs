//! `mycli list`: prints the templates `add` accepts.

use crate::console;
use crate::error::Result;
use crate::registry::{load_registry, TemplateRegistry};
use colored::Colorize;
use std::path::Path;

/// One line per template: `title (type)`.
pub fn summary(registry: &TemplateRegistry) -> Vec<String> {
    registry
        .templates
        .iter()
        .map(|t| format!("{} ({})", t.title, t.kind))
        .collect()
}

pub fn run(project_root: &Path) -> Result<TemplateRegistry> {
    let registry = load_registry(project_root)?;

    if registry.templates.is_empty() {
        console::warn("No templates found in registry.");
        return Ok(registry);
    }

    println!(
        "{}",
        format!("Available Templates ({})", registry.templates.len())
            .blue()
            .bold()
    );
    console::divider();
    for (template, line) in registry.templates.iter().zip(summary(&registry)) {
        console::success(&line);
        console::running(&template.description);
        if !template.dependencies.is_empty() {
            console::running(&format!(
                "  Dependencies: {}",
                template.dependencies.join(", ")
            ));
        }
        println!();
    }

    Ok(registry)
}

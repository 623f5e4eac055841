//! Placeholder substitution and name derivation for template bodies.

use crate::constants::NAME_PLACEHOLDER;
use crate::registry::TemplateDescriptor;
use cruet::Inflector;
use indexmap::IndexMap;

/// Converts a template name to a component name (PascalCase).
///
/// `user-card` becomes `UserCard`.
pub fn to_component_name(name: &str) -> String {
    name.to_pascal_case()
}

/// Converts a template name to a hook name (`use` + PascalCase).
pub fn to_hook_name(name: &str) -> String {
    format!("use{}", to_component_name(name))
}

/// Builds the replacement map for the descriptor's placeholders.
///
/// # Arguments
/// * `template` - Template being instantiated
/// * `custom_name` - Name given on the command line, the title otherwise
///
/// # Returns
/// * `IndexMap<String, String>` - Placeholder key to value, in declaration order
pub fn generate_replacements(
    template: &TemplateDescriptor,
    custom_name: Option<&str>,
) -> IndexMap<String, String> {
    let base_name = custom_name.unwrap_or(&template.title);

    template
        .placeholders
        .iter()
        .map(|placeholder| {
            let value = match placeholder.as_str() {
                "COMPONENT_NAME" => to_component_name(base_name),
                "HOOK_NAME" => to_hook_name(base_name),
                "FILE_NAME" => base_name.to_string(),
                // Custom placeholders take the base name
                _ => base_name.to_string(),
            };
            (placeholder.clone(), value)
        })
        .collect()
}

/// Replaces every `__KEY__` token with its value. Keys are upper-cased
/// before lookup, so `file_name` matches `__FILE_NAME__`.
pub fn replace_placeholders(content: &str, replacements: &IndexMap<String, String>) -> String {
    replacements
        .iter()
        .fold(content.to_string(), |result, (placeholder, value)| {
            result.replace(&format!("__{}__", placeholder.to_uppercase()), value)
        })
}

/// Produces the final file content: `__NAME__` becomes the descriptor's
/// source name, then the placeholder replacements apply.
pub fn render_template(
    body: &str,
    template: &TemplateDescriptor,
    replacements: &IndexMap<String, String>,
) -> String {
    let named = body.replace(NAME_PLACEHOLDER, &template.name);
    if replacements.is_empty() {
        named
    } else {
        replace_placeholders(&named, replacements)
    }
}

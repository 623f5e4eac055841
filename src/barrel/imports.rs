//! Import line synthesis for barrel files.

use super::exports::ExportSet;
use regex::Regex;

/// Renders the import statement for `exports`.
///
/// A lone default export is bound to `local_alias`; anything else is
/// imported by name.
pub fn import_statement(exports: &ExportSet, import_path: &str, local_alias: &str) -> String {
    if exports.is_single_default() {
        format!("import {local_alias} from '{import_path}';")
    } else {
        format!("import {{ {} }} from '{import_path}';", exports.join(", "))
    }
}

/// Whether `barrel` already imports from exactly `import_path`.
pub fn imports_from(barrel: &str, import_path: &str) -> bool {
    let pattern = format!(r#"from\s*['"]{}['"]"#, regex::escape(import_path));
    Regex::new(&pattern).is_ok_and(|re| re.is_match(barrel))
}

/// Ensures `barrel` imports from `import_path`, prepending a new import line
/// when it does not.
///
/// An existing import from the same path is left alone, even when it names
/// fewer symbols than `exports`.
pub fn ensure_import_line(
    barrel: &str,
    exports: &ExportSet,
    import_path: &str,
    local_alias: &str,
) -> String {
    if imports_from(barrel, import_path) {
        return barrel.to_string();
    }
    format!(
        "{}\n{barrel}",
        import_statement(exports, import_path, local_alias)
    )
}

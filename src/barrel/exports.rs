//! Static discovery of a source file's exports.
//!
//! Three shapes are recognized, each independently:
//!
//! 1. declarations: `export const|let|var|function|class Name`
//! 2. export lists: `export { a, b as c }`
//! 3. a default export: `export default Name`
//!
//! A default export contributes the template's source name rather than the
//! local identifier, since that is the name the barrel binds it to.
//! `export async function`, `export type`, `export * from` and export lists
//! with nested braces are not recognized.

use indexmap::IndexSet;
use regex::Regex;
use std::sync::LazyLock;

static DECLARATION_EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export\s+(?:const|let|var|function|class)\s+(\w+)").unwrap()
});

static LIST_EXPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s*\{([^}]+)\}").unwrap());

static DEFAULT_EXPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s+default\s+(\w+)").unwrap());

/// Names a source file exports, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSet {
    names: IndexSet<String>,
    has_default_export: bool,
}

impl ExportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from names; mostly useful in tests.
    pub fn from_names<I, S>(names: I, has_default_export: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            has_default_export,
        }
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn has_default_export(&self) -> bool {
        self.has_default_export
    }

    /// A lone default export is imported with the default-import form.
    pub fn is_single_default(&self) -> bool {
        self.has_default_export && self.names.len() == 1
    }

    /// Names joined with `separator`, in discovery order.
    pub fn join(&self, separator: &str) -> String {
        self.iter().collect::<Vec<_>>().join(separator)
    }
}

/// Scans `source` for exports.
///
/// # Arguments
/// * `source` - Text of the generated file
/// * `fallback_name` - Name recorded for a default export
///
/// # Returns
/// * `ExportSet` - Possibly empty; an empty set is not an error
pub fn extract(source: &str, fallback_name: &str) -> ExportSet {
    let mut exports = ExportSet::new();

    for captures in DECLARATION_EXPORT.captures_iter(source) {
        exports.insert(&captures[1]);
    }

    for captures in LIST_EXPORT.captures_iter(source) {
        for token in captures[1].split(',') {
            // `local as exported` is visible under the exported name
            let name = match token.rsplit_once(" as ") {
                Some((_, exported)) => exported.trim(),
                None => token.trim(),
            };
            if !name.is_empty() {
                exports.insert(name);
            }
        }
    }

    if DEFAULT_EXPORT.is_match(source) {
        exports.insert(fallback_name);
        exports.has_default_export = true;
    }

    exports
}

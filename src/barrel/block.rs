//! Merging of names into the barrel's `export default { ... }` aggregate.

use super::exports::ExportSet;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static EXPORT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)export\s+default\s*\{(.*?)\}[ \t]*;?").unwrap());

static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//[^\n]*").unwrap());

const ENTRY_SEPARATOR: &str = ",\n  ";

/// Trait for strategies that merge export names into a barrel's aggregate
/// default export.
pub trait ExportBlockMerger {
    /// Returns `barrel` with every name of `exports` present in its
    /// `export default { ... }` block, appending a block when there is none.
    fn merge(&self, barrel: &str, exports: &ExportSet) -> String;
}

/// Line-oriented merger working on the first `export default { ... }` match.
///
/// Entries are read by splitting on commas, so values holding nested
/// objects or arrays are not understood.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexBlockMerger;

impl RegexBlockMerger {
    pub fn new() -> Self {
        Self
    }
}

impl ExportBlockMerger for RegexBlockMerger {
    fn merge(&self, barrel: &str, exports: &ExportSet) -> String {
        let Some(captures) = EXPORT_BLOCK.captures(barrel) else {
            return append_block(barrel, exports);
        };
        let (Some(block), Some(inner)) = (captures.get(0), captures.get(1)) else {
            return append_block(barrel, exports);
        };

        let existing = existing_entries(inner.as_str());
        let new_exports: Vec<&str> = exports
            .iter()
            .filter(|name| !existing.contains(*name))
            .collect();
        if new_exports.is_empty() {
            return barrel.to_string();
        }

        let kept = terminate_last_entry(inner.as_str().trim());
        let body = if kept.is_empty() {
            new_exports.join(ENTRY_SEPARATOR)
        } else {
            format!("{kept}\n  {}", new_exports.join(ENTRY_SEPARATOR))
        };

        format!(
            "{}export default {{\n  {body}\n}};{}",
            &barrel[..block.start()],
            &barrel[block.end()..]
        )
    }
}

/// Merges with the default [`RegexBlockMerger`].
pub fn merge_export_block(barrel: &str, exports: &ExportSet) -> String {
    RegexBlockMerger.merge(barrel, exports)
}

/// Names already listed in a block body. Comments are dropped and for
/// `key: value` entries the key is taken.
fn existing_entries(inner: &str) -> HashSet<String> {
    let without_blocks = BLOCK_COMMENT.replace_all(inner, "");
    let uncommented = LINE_COMMENT.replace_all(&without_blocks, "");
    uncommented
        .split(',')
        .map(|entry| entry.split(':').next().unwrap_or_default().trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Makes sure the last entry of a body ends with a comma. A line comment
/// after the entry stays after the comma.
fn terminate_last_entry(body: &str) -> String {
    let mut lines: Vec<String> = body.lines().map(str::to_string).collect();

    for line in lines.iter_mut().rev() {
        let code_end = LINE_COMMENT.find(line).map_or(line.len(), |m| m.start());
        let code = line[..code_end].trim_end().to_string();
        if BLOCK_COMMENT.replace_all(&code, "").trim().is_empty() {
            continue;
        }
        if !code.ends_with(',') {
            let comment = line[code_end..].to_string();
            *line = if comment.is_empty() {
                format!("{code},")
            } else {
                format!("{code}, {comment}")
            };
        }
        break;
    }

    lines.join("\n")
}

fn append_block(barrel: &str, exports: &ExportSet) -> String {
    let block = format!("export default {{\n  {}\n}};\n", exports.join(ENTRY_SEPARATOR));
    if barrel.is_empty() {
        return block;
    }
    let separator = if barrel.ends_with('\n') { "\n" } else { "\n\n" };
    format!("{barrel}{separator}{block}")
}

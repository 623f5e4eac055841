//! Barrel file maintenance.
//!
//! After `add` writes a new source file, [`update_index`] re-exports it from
//! the folder's `index.ts` / `index.tsx`. The work is plain text rewriting
//! driven by regular expressions:
//!
//! - [`exports::extract`] finds what the new file exports
//! - [`imports::ensure_import_line`] adds the import unless one exists
//! - [`block::ExportBlockMerger`] adds the names to `export default { ... }`
//! - [`provider::wrap_provider`] nests the providers barrel's render body
//!   inside the new provider instead of touching the export block
//!
//! Every step is idempotent, so adding the same template twice leaves the
//! barrel as the first run wrote it.

pub mod block;
pub mod exports;
pub mod imports;
pub mod provider;

pub use block::{merge_export_block, ExportBlockMerger, RegexBlockMerger};
pub use exports::{extract, ExportSet};
pub use imports::ensure_import_line;
pub use provider::{wrap_provider, ProviderWrap, WrapOutcome};

use crate::error::{Error, Result};
use crate::registry::{TemplateDescriptor, TemplateKind};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Conditions that leave the barrel partially or entirely untouched without
/// failing the command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexWarning {
    #[error("No exports found in {}", path.display())]
    EmptyExportSet { path: PathBuf },

    #[error("No recognizable return JSX found to wrap in {}", path.display())]
    UnrecognizedJsxShape { path: PathBuf },
}

/// What [`update_index`] did to the barrel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexUpdate {
    /// Import line and export block are in place.
    Merged { barrel: PathBuf, changed: bool },
    /// Provider import ensured and the render body handled.
    Provider { barrel: PathBuf, outcome: WrapOutcome },
    /// Nothing to index.
    Skipped { warning: IndexWarning },
}

impl IndexUpdate {
    pub fn warning(&self) -> Option<IndexWarning> {
        match self {
            IndexUpdate::Skipped { warning } => Some(warning.clone()),
            IndexUpdate::Provider {
                barrel,
                outcome: WrapOutcome::UnrecognizedBody,
            } => Some(IndexWarning::UnrecognizedJsxShape {
                path: barrel.clone(),
            }),
            _ => None,
        }
    }
}

/// Path of the barrel file for `kind` inside `target_dir`.
pub fn barrel_path<P: AsRef<Path>>(target_dir: P, kind: TemplateKind) -> PathBuf {
    target_dir.as_ref().join(kind.barrel_file_name())
}

/// Updates the barrel of `target_dir` for the file just generated from
/// `template`, using the default export block merger.
///
/// # Errors
/// * `Error::GeneratedFileMissing` if `target_dir/<title>.<ext>` does not exist
/// * `Error::BarrelWriteFailure` if the barrel cannot be written
/// * `Error::IoError` for other file system failures
pub fn update_index<P: AsRef<Path>>(
    template: &TemplateDescriptor,
    target_dir: P,
) -> Result<IndexUpdate> {
    update_index_with(template, target_dir, &RegexBlockMerger)
}

/// Same as [`update_index`] with a caller-supplied export block merger.
pub fn update_index_with<P: AsRef<Path>>(
    template: &TemplateDescriptor,
    target_dir: P,
    merger: &dyn ExportBlockMerger,
) -> Result<IndexUpdate> {
    let target_dir = target_dir.as_ref();
    let generated_path = target_dir.join(template.file_name());
    let barrel = barrel_path(target_dir, template.kind);

    if !generated_path.is_file() {
        return Err(Error::GeneratedFileMissing {
            path: generated_path,
        });
    }

    if !barrel.exists() {
        debug!("Creating empty index file {}", barrel.display());
        write_barrel(&barrel, "")?;
    }

    let original = fs::read_to_string(&barrel)?;
    let source = fs::read_to_string(&generated_path)?;

    let exports = extract(&source, &template.name);
    debug!(
        "Exports of {}: [{}]",
        generated_path.display(),
        exports.join(", ")
    );
    if exports.is_empty() {
        let warning = IndexWarning::EmptyExportSet {
            path: generated_path,
        };
        warn!("{warning}");
        return Ok(IndexUpdate::Skipped { warning });
    }

    let import_path = template.import_path();

    if template.kind == TemplateKind::Provider {
        let wrap = wrap_provider(&original, &exports, &template.name, &import_path);
        write_barrel(&barrel, &wrap.text)?;
        match wrap.outcome {
            WrapOutcome::Wrapped => info!("Wrapped providers with {}", template.name),
            WrapOutcome::AlreadyWrapped => {
                info!("Providers already wrapped with {}", template.name)
            }
            WrapOutcome::UnrecognizedBody => warn!(
                "{}",
                IndexWarning::UnrecognizedJsxShape {
                    path: barrel.clone()
                }
            ),
        }
        return Ok(IndexUpdate::Provider {
            barrel,
            outcome: wrap.outcome,
        });
    }

    let imported = ensure_import_line(&original, &exports, &import_path, &template.name);
    let updated = merger.merge(&imported, &exports);
    write_barrel(&barrel, &updated)?;
    info!(
        "Index updated with exports from {}",
        template.file_name()
    );

    Ok(IndexUpdate::Merged {
        changed: updated != original,
        barrel,
    })
}

fn write_barrel(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::BarrelWriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

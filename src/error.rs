//! Error handling for mycli.
//! Defines the error type and result alias shared by the commands and the
//! barrel update engine.

use colored::Colorize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors for a single mycli command.
///
/// Recoverable conditions of the barrel engine (an empty export set, a provider
/// body that cannot be located) are not represented here; see
/// [`crate::barrel::IndexWarning`].
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("Failed to parse JSON: {0}.")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}.")]
    YamlError(#[from] serde_yaml::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Registry error: {0}.")]
    RegistryError(String),

    #[error("This directory is not a mycli project. Run \"mycli init\" first to initialize the project.")]
    ProjectNotInitialized,

    #[error("This directory already contains a mycli project. Use --force to reinitialize.")]
    ProjectAlreadyInitialized,

    #[error("Template \"{name}\" not found in registry. Available templates: {available}.")]
    TemplateNotFound { name: String, available: String },

    #[error("No content available for template \"{0}\".")]
    TemplateContentMissing(String),

    #[error("File already exists: {}. Use --force to overwrite existing files.", path.display())]
    FileExists { path: PathBuf },

    /// The file written right before the barrel update is gone.
    #[error("Generated file not found: {}.", path.display())]
    GeneratedFileMissing { path: PathBuf },

    #[error("Failed to write index file {}: {source}.", path.display())]
    BarrelWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Formatter error: {0}.")]
    FormatterError(String),

    /// Represents failures of interactive prompts
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),
}

/// Convenience type alias for Results with mycli's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr in red and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{} {}", "❌".red(), err.to_string().red());
    std::process::exit(1);
}

//! mycli scaffolds reusable UI code into a project.
//! It initializes the project's folder layout, instantiates templates from a
//! registry and keeps each folder's barrel file re-exporting what was added.

/// Barrel (index file) maintenance after a template is added
pub mod barrel;

/// Template body lookup
pub mod catalog;

/// Command-line interface module for mycli
pub mod cli;

/// `init`, `add` and `list` handlers
pub mod commands;

/// Project configuration (myproject.config.json)
pub mod config;

/// Colored console output
pub mod console;

pub mod constants;

/// Error types and handling for mycli
pub mod error;

/// Prettier invocation
pub mod formatter;

pub mod logger;

/// User input and interaction handling
pub mod prompt;

/// Template registry and descriptors
pub mod registry;

/// Placeholder substitution and name derivation
pub mod template;

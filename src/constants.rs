//! Common constants used throughout mycli.

/// Project configuration file names, in lookup order. The first one is the
/// name `init` writes.
pub const CONFIG_FILES: [&str; 3] = [
    "myproject.config.json",
    "myproject.config.yml",
    "myproject.config.yaml",
];

/// Project-local registry that overrides the built-in one
pub const REGISTRY_FILE: &str = "registry.json";

/// Placeholder replaced with the template's source name
pub const NAME_PLACEHOLDER: &str = "__NAME__";

pub const DEFAULT_PROJECT_VERSION: &str = "1.0.0";

/// Seed content for non-provider barrel files created by `init`.
pub const EMPTY_BARREL: &str = "export default {}\n";

/// Seed content for the providers barrel created by `init`.
pub const PROVIDERS_BARREL: &str = "import React from 'react';

const AppProviders = ({ children }: { children: React.ReactNode }) => {
  return <>{children}</>;
};

export default AppProviders;
";

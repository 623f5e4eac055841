//! External code formatter invocation.
//! Barrel edits are emitted with naive indentation; Prettier tidies them.

use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs `npx prettier --write <path>`.
///
/// # Errors
/// * `Error::IoError` if `npx` cannot be spawned
/// * `Error::FormatterError` if Prettier exits unsuccessfully
pub fn run_prettier<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Running prettier on {}", path.display());

    let output = Command::new("npx")
        .arg("prettier")
        .arg("--write")
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;

    if !output.status.success() {
        return Err(Error::FormatterError(format!(
            "prettier failed with status {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(())
}

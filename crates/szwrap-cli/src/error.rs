//! Error conversion utilities for CLI.
//!
//! Converts szwrap-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use szwrap_core::SzError;

/// Converts `SzError` to a user-friendly anyhow error with context
pub fn convert_sz_error(err: SzError, archive: &Path) -> anyhow::Error {
    match err {
        SzError::DuplicateBasename { name, paths } => {
            let listing = paths
                .iter()
                .map(|path| format!("  {}", path.display()))
                .collect::<Vec<_>>()
                .join("\n");
            anyhow!(
                "Cannot create '{}': multiple inputs would land at '{}' in the archive root:\n{}\n\
                 HINT: rename the conflicting entries or archive them separately.",
                archive.display(),
                name,
                listing
            )
        }
        SzError::DestinationExists { path } => {
            anyhow!(
                "Refusing to replace existing file '{}'\n\
                 HINT: pass --force to overwrite it.",
                path.display()
            )
        }
        SzError::DestinationIsDirectory { path } => {
            anyhow!(
                "A directory already exists at '{}'; archives cannot replace directories.",
                path.display()
            )
        }
        SzError::UnsupportedPassword => {
            anyhow!(
                "Passwords containing double quotes are not supported\n\
                 HINT: choose a password without the '\"' character."
            )
        }
        SzError::ToolExit { status, stderr } => {
            anyhow!(
                "7-Zip failed on '{}' ({status})\n{}",
                archive.display(),
                stderr.trim_end()
            )
        }
        SzError::UnexpectedOutput { output } => {
            anyhow!(
                "7-Zip did not report success for '{}'; full output follows:\n{}",
                archive.display(),
                output.trim_end()
            )
        }
        other => anyhow::Error::new(other),
    }
}

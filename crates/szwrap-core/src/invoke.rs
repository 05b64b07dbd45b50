//! Child-process invocation and output decoding.
//!
//! Arguments are handed to the child as a discrete list, never through a
//! shell, so no quoting or injection hazards apply. Each call blocks until
//! the child exits.

use crate::error::Result;
use crate::error::SzError;
use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::process::Command;

/// The literal substring 7-Zip prints when an operation fully succeeds.
///
/// Its presence in decoded standard output is the sole success criterion;
/// no finer-grained status parsing is attempted.
pub const SUCCESS_MARKER: &str = "Everything is Ok";

/// The encoding used to decode captured tool output.
///
/// 7-Zip's default console code page is Windows-1252; output is always
/// decoded with this fixed encoding, never the platform locale.
pub static OUTPUT_ENCODING: &encoding_rs::Encoding = &encoding_rs::WINDOWS_1252_INIT;

/// Decoded output captured from a successful tool run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput(String);

impl ToolOutput {
    /// Returns the decoded output text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the output, yielding the decoded text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ToolOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Spawns the executable with the given argument vector, waits for it to
/// exit, and applies the exit-status and success-marker checks.
pub(crate) fn run(exe: &Path, args: &[OsString]) -> Result<ToolOutput> {
    let output = Command::new(exe).args(args).output()?;
    if !output.status.success() {
        return Err(SzError::ToolExit {
            status: output.status,
            stderr: decode(&output.stderr),
        });
    }
    let text = decode(&output.stdout);
    if !text.contains(SUCCESS_MARKER) {
        return Err(SzError::UnexpectedOutput { output: text });
    }
    Ok(ToolOutput(text))
}

fn decode(bytes: &[u8]) -> String {
    let (text, _, _) = OUTPUT_ENCODING.decode(bytes);
    text.into_owned()
}

//! Error types for 7-Zip invocation.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias using `SzError`.
pub type Result<T> = std::result::Result<T, SzError>;

/// Errors that can occur while resolving, validating for, or invoking 7-Zip.
#[derive(Error, Debug)]
pub enum SzError {
    /// I/O operation failed (including failure to spawn the child process).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No usable 7-Zip executable could be resolved.
    #[error("no 7-Zip executable found (searched: {searched})")]
    ExecutableNotFound {
        /// The candidate names or paths that were tried.
        searched: String,
    },

    /// `create` was called with an empty input list.
    #[error("no input paths given")]
    NoInputs,

    /// Two or more input paths share a final path component.
    ///
    /// Archive layout is flat at the root, so entries would collide.
    #[error("multiple inputs share the name {name:?}: {paths:?}")]
    DuplicateBasename {
        /// The colliding final path component.
        name: String,
        /// Every input path carrying that component.
        paths: Vec<PathBuf>,
    },

    /// A directory already exists at the archive output path.
    ///
    /// 7-Zip will not create an archive over an existing directory.
    #[error("directory already exists at archive path: {path}")]
    DestinationIsDirectory {
        /// The archive output path.
        path: PathBuf,
    },

    /// A file already exists at the archive output path and overwrite is off.
    #[error("file already exists at archive path: {path}")]
    DestinationExists {
        /// The archive output path.
        path: PathBuf,
    },

    /// A regular file occupies the extraction directory path.
    ///
    /// The tool creates the directory itself, so only a directory or nothing
    /// may be there already.
    #[error("file exists at extraction directory path: {path}")]
    DestinationIsFile {
        /// The intended extraction directory.
        path: PathBuf,
    },

    /// The archive to test or extract does not exist.
    #[error("archive does not exist: {path}")]
    ArchiveNotFound {
        /// The resolved archive path.
        path: PathBuf,
    },

    /// An empty password was supplied.
    #[error("password must be at least one character long")]
    EmptyPassword,

    /// The password contains a double-quote character.
    ///
    /// Passing it through would require batch-file escaping that is not
    /// implemented, so it is rejected outright.
    #[error("double-quote characters in passwords are not supported")]
    UnsupportedPassword,

    /// The extraction directory's final component is empty or contains a
    /// reserved path character (`\ / : * ? " < > |`).
    #[error("invalid extraction directory name: {name:?}")]
    InvalidDestinationName {
        /// The offending final component.
        name: String,
    },

    /// An overwrite mode string did not match any known mode code.
    #[error(
        "invalid overwrite mode {value:?} (expected overwrite-all, skip, rename-new, or rename-existing)"
    )]
    InvalidOverwriteMode {
        /// The unrecognized value.
        value: String,
    },

    /// A volume spec was given but contains no size tokens.
    #[error("volume spec must contain at least one size token")]
    EmptyVolumeSpec,

    /// The tool exited with a non-zero status.
    #[error("7-Zip exited with {status}: {stderr}")]
    ToolExit {
        /// The child process exit status.
        status: ExitStatus,
        /// Decoded standard error from the child.
        stderr: String,
    },

    /// The tool exited cleanly but its output lacks the success marker.
    #[error("7-Zip did not report success:\n{output}")]
    UnexpectedOutput {
        /// The full decoded standard output, for diagnosis.
        output: String,
    },
}

impl SzError {
    /// Returns `true` if this error was raised by input validation, before
    /// any child process was spawned.
    ///
    /// Validation errors are recoverable by the caller correcting input.
    ///
    /// # Examples
    ///
    /// ```
    /// use szwrap_core::SzError;
    ///
    /// let err = SzError::NoInputs;
    /// assert!(err.is_validation());
    ///
    /// let err = SzError::UnexpectedOutput {
    ///     output: String::new(),
    /// };
    /// assert!(!err.is_validation());
    /// ```
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NoInputs
                | Self::DuplicateBasename { .. }
                | Self::DestinationIsDirectory { .. }
                | Self::DestinationExists { .. }
                | Self::DestinationIsFile { .. }
                | Self::ArchiveNotFound { .. }
                | Self::EmptyPassword
                | Self::UnsupportedPassword
                | Self::InvalidDestinationName { .. }
                | Self::InvalidOverwriteMode { .. }
                | Self::EmptyVolumeSpec
        )
    }

    /// Returns `true` if the external tool ran but the call still failed,
    /// either through a non-zero exit or output missing the success marker.
    #[must_use]
    pub const fn is_tool_failure(&self) -> bool {
        matches!(self, Self::ToolExit { .. } | Self::UnexpectedOutput { .. })
    }
}

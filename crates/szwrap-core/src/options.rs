//! Per-call request options for the three archive operations.

use crate::error::Result;
use crate::error::SzError;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

/// A validated archive password.
///
/// Passwords must be at least one character long and must not contain a
/// double-quote character, which the underlying tool cannot receive without
/// escaping support this crate does not implement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// The sentinel supplied when `test` or `extract` receive no password.
    ///
    /// ASCII DEL. Supplying *some* password keeps the tool from prompting
    /// interactively on a protected archive.
    pub const SENTINEL: &'static str = "\u{7f}";

    /// Validates and wraps a password.
    ///
    /// # Errors
    ///
    /// Returns [`SzError::EmptyPassword`] for an empty string and
    /// [`SzError::UnsupportedPassword`] if the string contains `"`.
    pub fn new(password: impl Into<String>) -> Result<Self> {
        let password = password.into();
        if password.is_empty() {
            return Err(SzError::EmptyPassword);
        }
        if password.contains('"') {
            return Err(SzError::UnsupportedPassword);
        }
        Ok(Self(password))
    }

    /// Returns the password text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn sentinel() -> Self {
        Self(Self::SENTINEL.to_string())
    }
}

/// How the tool handles an extracted file that already exists on disk.
///
/// Maps onto 7-Zip's `-ao{a,s,u,t}` switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Overwrite the existing file without prompting (`-aoa`).
    #[default]
    OverwriteAll,
    /// Skip the archived file and keep what is on disk (`-aos`).
    Skip,
    /// Auto-rename the extracted file (`-aou`).
    RenameNew,
    /// Auto-rename the existing file on disk (`-aot`).
    RenameExisting,
}

impl OverwriteMode {
    /// The single-character mode code appended to `-ao`.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::OverwriteAll => 'a',
            Self::Skip => 's',
            Self::RenameNew => 'u',
            Self::RenameExisting => 't',
        }
    }
}

/// Boolean shorthand: `true` overwrites everything, `false` skips.
impl From<bool> for OverwriteMode {
    fn from(overwrite: bool) -> Self {
        if overwrite { Self::OverwriteAll } else { Self::Skip }
    }
}

impl FromStr for OverwriteMode {
    type Err = SzError;

    /// Accepts the long mode names, the raw 7-Zip mode codes, and the
    /// `true`/`false` boolean shorthand.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "overwrite-all" | "overwrite" | "a" | "true" => Ok(Self::OverwriteAll),
            "skip" | "s" | "false" => Ok(Self::Skip),
            "rename-new" | "u" => Ok(Self::RenameNew),
            "rename-existing" | "t" => Ok(Self::RenameExisting),
            other => Err(SzError::InvalidOverwriteMode {
                value: other.to_string(),
            }),
        }
    }
}

/// Output loudness passed to the tool as `-bb{0-3}`.
///
/// The exact meaning of each level is the tool's business; this crate only
/// guarantees the digit it sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Level 0, disable log.
    Quiet,
    /// Level 1, names of processed files.
    Files,
    /// Level 2, additional internal processing.
    Extra,
    /// Level 3, everything.
    #[default]
    Full,
}

impl Verbosity {
    /// The digit for the `-bb` switch.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Quiet => 0,
            Self::Files => 1,
            Self::Extra => 2,
            Self::Full => 3,
        }
    }

    /// Converts a raw level in `0..=3`, or `None` if out of range.
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Quiet),
            1 => Some(Self::Files),
            2 => Some(Self::Extra),
            3 => Some(Self::Full),
            _ => None,
        }
    }
}

/// Options for [`SevenZip::create`](crate::SevenZip::create).
///
/// Defaults: no password, no header encryption, no overwrite, full
/// verbosity, single-volume archive.
///
/// # Examples
///
/// ```
/// use szwrap_core::CreateOptions;
/// use szwrap_core::Password;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = CreateOptions::default()
///     .with_password(Password::new("hunter2")?)
///     .with_encrypt_headers(true)
///     .with_volumes("10k 2m");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Password to encrypt the archive with, if any.
    pub password: Option<Password>,
    /// Also encrypt file names and the directory tree. Only meaningful
    /// together with a password; ignored without one.
    pub encrypt_headers: bool,
    /// Replace an existing file at the archive path.
    pub overwrite: bool,
    /// Tool output loudness.
    pub verbosity: Verbosity,
    /// Whitespace-separated volume size tokens, e.g. `"10k 15k 2m"`.
    ///
    /// The first volume gets the first size, the second the second, and all
    /// remaining volumes the last.
    pub volumes: Option<String>,
}

impl CreateOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the archive password.
    #[must_use]
    pub fn with_password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Sets whether archive headers are encrypted as well.
    #[must_use]
    pub fn with_encrypt_headers(mut self, encrypt: bool) -> Self {
        self.encrypt_headers = encrypt;
        self
    }

    /// Sets whether an existing file at the archive path is replaced.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets the tool output loudness.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Sets the volume size spec.
    #[must_use]
    pub fn with_volumes(mut self, volumes: impl Into<String>) -> Self {
        self.volumes = Some(volumes.into());
        self
    }
}

/// Options for [`SevenZip::test`](crate::SevenZip::test).
#[derive(Debug, Clone, Default)]
pub struct TestOptions {
    /// Password for a protected archive. The [`Password::SENTINEL`] is sent
    /// when absent.
    pub password: Option<Password>,
    /// Tool output loudness.
    pub verbosity: Verbosity,
}

impl TestOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the archive password.
    #[must_use]
    pub fn with_password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Sets the tool output loudness.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

/// Options for [`SevenZip::extract`](crate::SevenZip::extract).
///
/// Defaults: extract into the current directory, preserve the archived
/// directory tree, overwrite existing files, full verbosity.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Directory to extract into. Defaults to the current directory; the
    /// tool creates it if missing.
    pub into_dir: Option<PathBuf>,
    /// Password for a protected archive. The [`Password::SENTINEL`] is sent
    /// when absent.
    pub password: Option<Password>,
    /// Extract every file into the target directory, discarding the
    /// archived directory structure.
    pub flat: bool,
    /// What to do when an extracted file already exists on disk.
    pub overwrite: OverwriteMode,
    /// Tool output loudness.
    pub verbosity: Verbosity,
}

impl ExtractOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the extraction directory.
    #[must_use]
    pub fn with_into_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.into_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Sets the archive password.
    #[must_use]
    pub fn with_password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Sets flat extraction (ignore the archived directory tree).
    #[must_use]
    pub fn with_flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }

    /// Sets the overwrite mode.
    #[must_use]
    pub fn with_overwrite(mut self, mode: OverwriteMode) -> Self {
        self.overwrite = mode;
        self
    }

    /// Sets the tool output loudness.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

//! Resolving the 7-Zip executable and the three archive operations.

use crate::command;
use crate::error::Result;
use crate::error::SzError;
use crate::invoke;
use crate::invoke::ToolOutput;
use crate::options::CreateOptions;
use crate::options::ExtractOptions;
use crate::options::TestOptions;
use std::path::Path;
use std::path::PathBuf;

/// A resolved 7-Zip executable.
///
/// Resolution happens once, at construction; the handle holds only the
/// immutable path, so it is cheap to clone and safe to share across
/// independent callers. Every operation spawns one blocking child process
/// and waits for it to exit before returning.
///
/// # Examples
///
/// ```no_run
/// use szwrap_core::ExtractOptions;
/// use szwrap_core::SevenZip;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tool = SevenZip::locate()?;
/// tool.extract("backup.7z", &ExtractOptions::default().with_into_dir("restored"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SevenZip {
    exe: PathBuf,
}

impl SevenZip {
    /// Uses an explicitly configured executable path.
    ///
    /// # Errors
    ///
    /// Returns [`SzError::ExecutableNotFound`] if nothing exists at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let exe = path.as_ref().to_path_buf();
        if !exe.exists() {
            return Err(SzError::ExecutableNotFound {
                searched: exe.display().to_string(),
            });
        }
        Ok(Self { exe })
    }

    /// Searches `PATH` for a 7-Zip executable.
    ///
    /// Candidates are tried in order: `7z`, `7za`, `7zr` (with `.exe`
    /// variants first on Windows).
    ///
    /// # Errors
    ///
    /// Returns [`SzError::ExecutableNotFound`] if no candidate resolves.
    pub fn locate() -> Result<Self> {
        for name in candidate_names() {
            if let Ok(exe) = which::which(name) {
                return Ok(Self { exe });
            }
        }
        Err(SzError::ExecutableNotFound {
            searched: candidate_names().join(", "),
        })
    }

    /// Resolves a bundled executable under `root`.
    ///
    /// Picks `root/x64/7z` when the host pointer width is 64 and that file
    /// exists, falling back to `root/x32/7z` otherwise (`.exe` suffix on
    /// Windows).
    ///
    /// # Errors
    ///
    /// Returns [`SzError::ExecutableNotFound`] if neither candidate exists.
    pub fn locate_in(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let exe_name = if cfg!(windows) { "7z.exe" } else { "7z" };
        let wide = root.join("x64").join(exe_name);
        let narrow = root.join("x32").join(exe_name);

        if cfg!(target_pointer_width = "64") && wide.is_file() {
            return Ok(Self { exe: wide });
        }
        if narrow.is_file() {
            return Ok(Self { exe: narrow });
        }
        Err(SzError::ExecutableNotFound {
            searched: format!("{}, {}", wide.display(), narrow.display()),
        })
    }

    /// Returns the resolved executable path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.exe
    }

    /// Creates a 7z archive from files and directories.
    ///
    /// Inputs land flat in the archive root, so their basenames must be
    /// unique. The archive is written as 7z format with LZMA2 at maximum
    /// compression.
    ///
    /// # Errors
    ///
    /// Validation errors are raised before any process is spawned; see
    /// [`SzError::is_validation`]. Tool failures carry the captured output.
    pub fn create<I, P>(
        &self,
        inputs: I,
        archive: impl AsRef<Path>,
        options: &CreateOptions,
    ) -> Result<ToolOutput>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let inputs: Vec<PathBuf> = inputs
            .into_iter()
            .map(|path| path.as_ref().to_path_buf())
            .collect();
        let args = command::create_args(&inputs, archive.as_ref(), options)?;
        invoke::run(&self.exe, &args)
    }

    /// Tests the integrity of an archive.
    ///
    /// Without a caller-supplied password the [sentinel] is sent, so a
    /// protected archive fails instead of prompting.
    ///
    /// [sentinel]: crate::Password::SENTINEL
    ///
    /// # Errors
    ///
    /// Fails with a tool error when the archive is damaged or the password
    /// is wrong.
    pub fn test(&self, archive: impl AsRef<Path>, options: &TestOptions) -> Result<ToolOutput> {
        let args = command::test_args(archive.as_ref(), options)?;
        invoke::run(&self.exe, &args)
    }

    /// Extracts an archive.
    ///
    /// For a split-volume archive pass the first volume (`example.7z.001`).
    /// The destination directory is created by the tool if missing.
    ///
    /// # Errors
    ///
    /// Validation errors are raised before any process is spawned; see
    /// [`SzError::is_validation`]. Tool failures carry the captured output.
    pub fn extract(
        &self,
        archive: impl AsRef<Path>,
        options: &ExtractOptions,
    ) -> Result<ToolOutput> {
        let args = command::extract_args(archive.as_ref(), options)?;
        invoke::run(&self.exe, &args)
    }
}

fn candidate_names() -> &'static [&'static str] {
    if cfg!(windows) {
        &["7z.exe", "7za.exe", "7zr.exe", "7z", "7za", "7zr"]
    } else {
        &["7z", "7za", "7zr"]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_path_missing_executable() {
        let temp = TempDir::new().unwrap();
        let result = SevenZip::from_path(temp.path().join("absent"));
        assert!(matches!(result, Err(SzError::ExecutableNotFound { .. })));
    }

    #[test]
    fn test_from_path_existing_file() {
        let temp = TempDir::new().unwrap();
        let exe = temp.path().join("7z");
        fs::write(&exe, "").unwrap();

        let tool = SevenZip::from_path(&exe).unwrap();
        assert_eq!(tool.path(), exe.as_path());
    }

    #[test]
    fn test_locate_in_empty_root() {
        let temp = TempDir::new().unwrap();
        let result = SevenZip::locate_in(temp.path());
        assert!(matches!(result, Err(SzError::ExecutableNotFound { .. })));
    }

    #[test]
    fn test_locate_in_falls_back_to_x32() {
        let temp = TempDir::new().unwrap();
        let exe_name = if cfg!(windows) { "7z.exe" } else { "7z" };
        let narrow = temp.path().join("x32");
        fs::create_dir(&narrow).unwrap();
        fs::write(narrow.join(exe_name), "").unwrap();

        let tool = SevenZip::locate_in(temp.path()).unwrap();
        assert!(tool.path().ends_with(Path::new("x32").join(exe_name)));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_locate_in_prefers_x64_on_wide_hosts() {
        let temp = TempDir::new().unwrap();
        let exe_name = if cfg!(windows) { "7z.exe" } else { "7z" };
        for dir in ["x32", "x64"] {
            let sub = temp.path().join(dir);
            fs::create_dir(&sub).unwrap();
            fs::write(sub.join(exe_name), "").unwrap();
        }

        let tool = SevenZip::locate_in(temp.path()).unwrap();
        assert!(tool.path().ends_with(Path::new("x64").join(exe_name)));
    }
}

//! Argument-vector construction and pre-spawn validation.
//!
//! Every function here is pure with respect to the child process: it reads
//! the filesystem to validate inputs but spawns nothing. All validation
//! failures happen before any argument vector leaves this module.

use crate::error::Result;
use crate::error::SzError;
use crate::options::CreateOptions;
use crate::options::ExtractOptions;
use crate::options::Password;
use crate::options::TestOptions;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;

/// Characters that may not appear in the extraction directory's final
/// component.
const RESERVED_DIR_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Builds the argument vector for `7z a`.
///
/// Input and archive paths are made absolute. The archive is always created
/// as 7z format with LZMA2 at maximum compression, with progress reporting
/// (`-bt`) on.
pub(crate) fn create_args(
    inputs: &[PathBuf],
    archive: &Path,
    options: &CreateOptions,
) -> Result<Vec<OsString>> {
    if inputs.is_empty() {
        return Err(SzError::NoInputs);
    }
    let inputs = inputs
        .iter()
        .map(std::path::absolute)
        .collect::<std::io::Result<Vec<_>>>()?;

    // Archive layout is flat at the root, so basenames must be unique.
    check_unique_basenames(&inputs)?;

    let archive = std::path::absolute(archive)?;
    if archive.is_dir() {
        return Err(SzError::DestinationIsDirectory { path: archive });
    }
    if archive.is_file() && !options.overwrite {
        return Err(SzError::DestinationExists { path: archive });
    }

    let volume_flags = volume_flags(options.volumes.as_deref())?;

    let mut args: Vec<OsString> = vec![
        OsString::from("a"),
        archive.into_os_string(),
        OsString::from("-t7z"),
        OsString::from("-m0=lzma2"),
        OsString::from("-mx=9"),
        verbosity_flag(options.verbosity.level()),
        OsString::from("-bt"),
    ];
    if options.overwrite {
        args.push(OsString::from("-aoa"));
    }
    args.extend(volume_flags);
    if let Some(password) = &options.password {
        args.push(password_flag(password));
        // Header encryption needs a password to mean anything.
        if options.encrypt_headers {
            args.push(OsString::from("-mhe"));
        }
    }
    args.extend(inputs.into_iter().map(PathBuf::into_os_string));
    Ok(args)
}

/// Builds the argument vector for `7z t`.
///
/// A password is always supplied; without one from the caller the sentinel
/// keeps a protected archive from prompting interactively.
pub(crate) fn test_args(archive: &Path, options: &TestOptions) -> Result<Vec<OsString>> {
    let archive = std::path::absolute(archive)?;
    let password = options.password.clone().unwrap_or_else(Password::sentinel);
    Ok(vec![
        OsString::from("t"),
        archive.into_os_string(),
        password_flag(&password),
        verbosity_flag(options.verbosity.level()),
        OsString::from("-bt"),
    ])
}

/// Builds the argument vector for `7z x` (tree-preserving) or `7z e` (flat).
///
/// The archive path goes last; positional ordering is significant for
/// extraction.
pub(crate) fn extract_args(archive: &Path, options: &ExtractOptions) -> Result<Vec<OsString>> {
    let archive = std::path::absolute(archive)?;
    if !archive.is_file() {
        return Err(SzError::ArchiveNotFound { path: archive });
    }

    let password = options.password.clone().unwrap_or_else(Password::sentinel);

    let into_dir = options
        .into_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let into_dir = trim_path(into_dir);
    if into_dir.as_os_str().is_empty() {
        return Err(SzError::InvalidDestinationName {
            name: String::new(),
        });
    }
    let into_dir = std::path::absolute(into_dir)?;
    validate_dest_name(&into_dir)?;
    if into_dir.is_file() {
        // The tool creates the directory; a file in the way is fatal.
        return Err(SzError::DestinationIsFile { path: into_dir });
    }

    Ok(vec![
        OsString::from(if options.flat { "e" } else { "x" }),
        path_flag("-o", &into_dir),
        password_flag(&password),
        OsString::from(format!("-ao{}", options.overwrite.code())),
        verbosity_flag(options.verbosity.level()),
        OsString::from("-bt"),
        archive.into_os_string(),
    ])
}

/// Rejects input lists where two distinct paths share a final component.
fn check_unique_basenames(inputs: &[PathBuf]) -> Result<()> {
    let mut seen: BTreeMap<String, Vec<&PathBuf>> = BTreeMap::new();
    for path in inputs {
        seen.entry(basename(path)).or_default().push(path);
    }
    for (name, paths) in seen {
        if paths.len() > 1 {
            return Err(SzError::DuplicateBasename {
                name,
                paths: paths.into_iter().cloned().collect(),
            });
        }
    }
    Ok(())
}

fn basename(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.to_string_lossy().into_owned(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Splits a volume spec into one `-v{size}` flag per whitespace-separated
/// token.
fn volume_flags(spec: Option<&str>) -> Result<Vec<OsString>> {
    let Some(spec) = spec else {
        return Ok(Vec::new());
    };
    let flags: Vec<OsString> = spec
        .split_whitespace()
        .map(|size| OsString::from(format!("-v{size}")))
        .collect();
    if flags.is_empty() {
        return Err(SzError::EmptyVolumeSpec);
    }
    Ok(flags)
}

fn validate_dest_name(dir: &Path) -> Result<()> {
    let name = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    if name.is_empty() || name.contains(RESERVED_DIR_CHARS) {
        return Err(SzError::InvalidDestinationName { name });
    }
    Ok(())
}

/// Strips surrounding whitespace from a UTF-8 path; non-UTF-8 paths pass
/// through untouched.
fn trim_path(path: PathBuf) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(s.trim()),
        None => path,
    }
}

fn password_flag(password: &Password) -> OsString {
    OsString::from(format!("-p{}", password.as_str()))
}

fn verbosity_flag(level: u8) -> OsString {
    OsString::from(format!("-bb{level}"))
}

fn path_flag(prefix: &str, path: &Path) -> OsString {
    let mut flag = OsString::from(prefix);
    flag.push(path.as_os_str());
    flag
}

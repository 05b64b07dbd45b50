//! Command implementations.

pub mod create;
pub mod extract;

use anyhow::Result;
use anyhow::anyhow;
use std::path::Path;
use szwrap_core::Password;
use szwrap_core::SevenZip;

/// Resolves the tool from an explicit `--seven-zip` path or PATH search.
pub fn resolve_tool(explicit: Option<&Path>) -> Result<SevenZip> {
    let tool = match explicit {
        Some(path) => SevenZip::from_path(path),
        None => SevenZip::locate(),
    };
    tool.map_err(|err| {
        anyhow!("{err}\nHINT: install 7-Zip (p7zip) or pass --seven-zip PATH")
    })
}

/// Validates an optional password argument up front, so bad passwords fail
/// with the CLI's phrasing before any other work happens.
pub fn parse_password(password: Option<&str>) -> Result<Option<Password>> {
    password
        .map(|raw| {
            Password::new(raw).map_err(|err| crate::error::convert_sz_error(err, Path::new("")))
        })
        .transpose()
}

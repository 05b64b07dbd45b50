//! Typed interface to the 7-Zip command-line executable.
//!
//! `szwrap-core` shells out to a pre-built `7z` binary for archive creation,
//! integrity testing, and extraction. No compression or archive-format logic
//! lives here; the crate validates caller input, assembles an argument
//! vector, spawns the tool as a blocking child process, and checks its
//! decoded output for 7-Zip's literal success marker.
//!
//! # Examples
//!
//! ```no_run
//! use szwrap_core::CreateOptions;
//! use szwrap_core::SevenZip;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tool = SevenZip::locate()?;
//! let options = CreateOptions::default().with_overwrite(true);
//! let output = tool.create(&["notes.txt", "photos"], "backup.7z", &options)?;
//! println!("{}", output.as_str());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod command;

pub mod error;
pub mod invoke;
pub mod options;
pub mod tool;

// Re-export main API types
pub use error::Result;
pub use error::SzError;
pub use invoke::ToolOutput;
pub use options::CreateOptions;
pub use options::ExtractOptions;
pub use options::OverwriteMode;
pub use options::Password;
pub use options::TestOptions;
pub use options::Verbosity;
pub use tool::SevenZip;

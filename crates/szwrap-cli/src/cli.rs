//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;
use szwrap_core::OverwriteMode;
use szwrap_core::Verbosity;

#[derive(Parser)]
#[command(name = "szwrap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the 7-Zip executable (default: search PATH for 7z/7za/7zr)
    #[arg(long, global = true, value_name = "PATH")]
    pub seven_zip: Option<PathBuf>,

    /// Print the full tool transcript
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a 7z archive from files and directories
    Create(CreateArgs),
    /// Test the integrity of an archive
    Test(TestArgs),
    /// Extract an archive
    Extract(ExtractArgs),
}

#[derive(clap::Args)]
pub struct CreateArgs {
    /// Output archive path
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Files and directories to include (basenames must be unique)
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Encrypt the archive with this password
    #[arg(short, long)]
    pub password: Option<String>,

    /// Also encrypt file names and the directory tree
    #[arg(long, requires = "password")]
    pub encrypt_headers: bool,

    /// Replace an existing file at the archive path
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Whitespace-separated volume sizes, e.g. "10k 15k 2m"
    #[arg(long, value_name = "SPEC")]
    pub volumes: Option<String>,

    /// Tool output loudness (0-3)
    #[arg(long, default_value = "3", value_parser = parse_verbosity)]
    pub verbosity: Verbosity,
}

#[derive(clap::Args)]
pub struct TestArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Password for a protected archive
    #[arg(short, long)]
    pub password: Option<String>,

    /// Tool output loudness (0-3)
    #[arg(long, default_value = "3", value_parser = parse_verbosity)]
    pub verbosity: Verbosity,
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the archive file (first volume for split archives)
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Directory to extract into (default: current directory)
    #[arg(value_name = "DEST")]
    pub dest: Option<PathBuf>,

    /// Password for a protected archive
    #[arg(short, long)]
    pub password: Option<String>,

    /// Discard the archived directory structure
    #[arg(long)]
    pub flat: bool,

    /// What to do with existing files: overwrite-all, skip, rename-new,
    /// rename-existing
    #[arg(long, default_value = "overwrite-all", value_parser = parse_overwrite)]
    pub overwrite: OverwriteMode,

    /// Tool output loudness (0-3)
    #[arg(long, default_value = "3", value_parser = parse_verbosity)]
    pub verbosity: Verbosity,
}

fn parse_verbosity(s: &str) -> Result<Verbosity, String> {
    let level: u8 = s.parse().map_err(|_| format!("invalid level: {s}"))?;
    Verbosity::from_level(level).ok_or_else(|| format!("level must be 0-3, got {level}"))
}

fn parse_overwrite(s: &str) -> Result<OverwriteMode, String> {
    s.parse().map_err(|err| format!("{err}"))
}

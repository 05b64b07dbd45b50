//! Extract command implementation

use crate::cli::ExtractArgs;
use crate::error::convert_sz_error;
use crate::output::OutputFormatter;
use anyhow::Result;
use szwrap_core::ExtractOptions;
use szwrap_core::SevenZip;

pub fn execute(args: &ExtractArgs, tool: &SevenZip, formatter: &dyn OutputFormatter) -> Result<()> {
    let mut options = ExtractOptions::default()
        .with_flat(args.flat)
        .with_overwrite(args.overwrite)
        .with_verbosity(args.verbosity);
    if let Some(dest) = &args.dest {
        options = options.with_into_dir(dest);
    }
    if let Some(password) = super::parse_password(args.password.as_deref())? {
        options = options.with_password(password);
    }

    let output = tool
        .extract(&args.archive, &options)
        .map_err(|err| convert_sz_error(err, &args.archive))?;

    formatter.format_operation_result("extract", &args.archive, &output)
}

//! Create command implementation

use crate::cli::CreateArgs;
use crate::error::convert_sz_error;
use crate::output::OutputFormatter;
use anyhow::Result;
use szwrap_core::CreateOptions;
use szwrap_core::SevenZip;

pub fn execute(args: &CreateArgs, tool: &SevenZip, formatter: &dyn OutputFormatter) -> Result<()> {
    let mut options = CreateOptions::default()
        .with_encrypt_headers(args.encrypt_headers)
        .with_overwrite(args.force)
        .with_verbosity(args.verbosity);
    if let Some(password) = super::parse_password(args.password.as_deref())? {
        options = options.with_password(password);
    }
    if let Some(volumes) = &args.volumes {
        options = options.with_volumes(volumes);
    }

    let output = tool
        .create(&args.inputs, &args.archive, &options)
        .map_err(|err| convert_sz_error(err, &args.archive))?;

    formatter.format_operation_result("create", &args.archive, &output)
}

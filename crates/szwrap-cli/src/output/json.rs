//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use szwrap_core::ToolOutput;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_operation_result(
        &self,
        operation: &str,
        archive: &Path,
        output: &ToolOutput,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct OperationOutput {
            archive: String,
            tool_output: String,
        }

        let data = OperationOutput {
            archive: archive.display().to_string(),
            tool_output: output.as_str().to_string(),
        };

        let envelope = JsonOutput::success(operation, data);
        Self::output(&envelope)
    }
}

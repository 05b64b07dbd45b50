//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use szwrap_core::ToolOutput;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn headline(operation: &str, archive: &Path) -> String {
        match operation {
            "create" => format!("Archive created: {}", archive.display()),
            "test" => format!("Archive ok: {}", archive.display()),
            "extract" => format!("Extraction complete: {}", archive.display()),
            other => format!("{other} complete: {}", archive.display()),
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_operation_result(
        &self,
        operation: &str,
        archive: &Path,
        output: &ToolOutput,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let headline = Self::headline(operation, archive);
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {headline}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(&headline);
        }

        if self.verbose {
            let _ = self.term.write_line(output.as_str().trim_end());
        }
        Ok(())
    }
}

//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use tilemeta_core::Metadata;

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

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;

        if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_metadata(&self, metadata: &Metadata, include_raw: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} {} {}",
                style("✓").green().bold(),
                style(metadata.name()).bold(),
                metadata.version()
            ));
        } else {
            let _ = self
                .term
                .write_line(&format!("{} {}", metadata.name(), metadata.version()));
        }

        if self.verbose {
            let _ = self.term.write_line("");
            let _ = self
                .term
                .write_line(&format!("  Metadata file:  {}", metadata.path()));
            let _ = self.term.write_line(&format!(
                "  Document size:  {}",
                Self::format_size(metadata.raw().len() as u64)
            ));
        }

        if include_raw {
            let _ = self.term.write_line("");
            self.term.write_str(metadata.raw())?;
            if !metadata.raw().ends_with('\n') {
                let _ = self.term.write_line("");
            }
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        let term = Term::stderr();
        if self.use_colors {
            let _ = term.write_line(&format!("{} {error:#}", style("ERROR:").red().bold()));
        } else {
            let _ = term.write_line(&format!("ERROR: {error:#}"));
        }
    }
}

//! Output formatting for extraction summaries
//!
//! Formatters for JSON (machine-readable) and human-readable text output.
//!
//! # Example
//!
//! ```ignore
//! use abigrab::cli::output::{OutputFormat, OutputFormatter};
//!
//! let formatter = OutputFormatter::new(OutputFormat::Json);
//! let output = formatter.format(&summary)?;
//! println!("{}", output);
//! ```

use anyhow::{Context, Result};

use crate::extract::ExtractSummary;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// Human-readable formatted text
    Human,
}

/// Output formatter for extraction summaries
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Creates a new output formatter with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats an extraction summary according to the configured format
    pub fn format(&self, summary: &ExtractSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(summary).context("Failed to serialize summary as JSON")
            }
            OutputFormat::Human => Ok(Self::format_human(summary)),
        }
    }

    fn format_human(summary: &ExtractSummary) -> String {
        let mut out = String::new();

        out.push_str("ABI Extraction\n");
        out.push_str("==============\n");
        out.push_str(&format!("  Files scanned: {}\n", summary.files_walked));
        out.push_str(&format!("  ABIs written:  {}\n", summary.abis_written));
        out.push_str(&format!(
            "  Output dir:    {}\n",
            summary.output_dir.display()
        ));
        out.push_str(&format!("  Elapsed:       {} ms\n", summary.elapsed_ms));

        if !summary.written.is_empty() {
            out.push('\n');
            for name in &summary.written {
                out.push_str(&format!("  {}\n", name));
            }
        }

        out
    }
}

//! Command handlers
//!
//! Each handler resolves configuration, runs the requested operation, and
//! returns a process exit code. Errors are logged and mapped to a non-zero
//! exit; the run is never continued past the first failure.

use crate::cli::commands::ExtractArgs;
use crate::cli::output::OutputFormatter;
use crate::config::Config;
use crate::extract::Extractor;
use anyhow::Result;
use tracing::{debug, error};

/// Handles the `extract` subcommand.
///
/// Returns 0 on success, 1 on any filesystem, parse, or missing-field error.
pub fn handle_extract(args: &ExtractArgs) -> i32 {
    match run_extract(args) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Extraction failed: {:#}", e);
            1
        }
    }
}

fn run_extract(args: &ExtractArgs) -> Result<String> {
    // Env-derived defaults, overridden once by CLI arguments
    let mut config = Config::default();
    if let Some(dir) = &args.input_dir {
        config.input_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    config.validate()?;

    debug!(
        input = %config.input_dir.display(),
        output = %config.output_dir.display(),
        "Resolved configuration"
    );

    let extractor = Extractor::new(config.input_dir, config.output_dir);
    let summary = extractor.run()?;

    let formatter = OutputFormatter::new(args.format.into());
    formatter.format(&summary)
}

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Extracts contract ABI blobs from build artifact JSON files
#[derive(Parser, Debug)]
#[command(
    name = "abigrab",
    about = "Extracts contract ABI blobs from build artifact JSON files",
    version,
    long_about = "abigrab walks a build output tree, picks out interface artifacts \
                  (IFoo.json style names, skipping test, mock, and standard-library \
                  paths), and writes each artifact's abi field to its own file in \
                  the output directory."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Extract ABI files from a build artifact tree",
        long_about = "Recursively scans the input directory for interface artifacts and \
                      writes one ABI file per artifact into the output directory.\n\n\
                      Examples:\n  \
                      abigrab extract\n  \
                      abigrab extract ./out --output-dir ./abis\n  \
                      abigrab extract --format json"
    )]
    Extract(ExtractArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(
        value_name = "INPUT_DIR",
        help = "Build artifact tree to scan (defaults to ../../out/)"
    )]
    pub input_dir: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Directory to write ABI files into (defaults to ../../abis/)"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        // Verify that CLI structure is valid
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_default_extract_args() {
        let args = CliArgs::parse_from(["abigrab", "extract"]);
        match args.command {
            Commands::Extract(extract_args) => {
                assert!(extract_args.input_dir.is_none());
                assert!(extract_args.output_dir.is_none());
                assert_eq!(extract_args.format, OutputFormatArg::Human);
            }
        }
    }

    #[test]
    fn test_extract_with_paths() {
        let args = CliArgs::parse_from(["abigrab", "extract", "./out", "--output-dir", "./abis"]);
        match args.command {
            Commands::Extract(extract_args) => {
                assert_eq!(extract_args.input_dir, Some(PathBuf::from("./out")));
                assert_eq!(extract_args.output_dir, Some(PathBuf::from("./abis")));
            }
        }
    }

    #[test]
    fn test_extract_with_format() {
        let args = CliArgs::parse_from(["abigrab", "extract", "--format", "json"]);
        match args.command {
            Commands::Extract(extract_args) => {
                assert_eq!(extract_args.format, OutputFormatArg::Json);
            }
        }
    }

    #[test]
    fn test_global_verbose_flag() {
        let args = CliArgs::parse_from(["abigrab", "-v", "extract"]);
        assert!(args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_global_quiet_flag() {
        let args = CliArgs::parse_from(["abigrab", "-q", "extract"]);
        assert!(!args.verbose);
        assert!(args.quiet);
    }

    #[test]
    fn test_log_level_flag() {
        let args = CliArgs::parse_from(["abigrab", "--log-level", "debug", "extract"]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }
}

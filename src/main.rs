use abigrab::cli::commands::{CliArgs, Commands};
use abigrab::cli::handlers::handle_extract;
use abigrab::util::logging::{self, LoggingConfig};
use abigrab::VERSION;

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("abigrab v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Extract(extract_args) => handle_extract(extract_args),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    if let Some(level_str) = &args.log_level {
        logging::init_logging(LoggingConfig::with_level(logging::parse_level(level_str)));
    } else if args.verbose {
        logging::init_logging(LoggingConfig::with_level(Level::DEBUG));
    } else if args.quiet {
        logging::init_logging(LoggingConfig::with_level(Level::ERROR));
    } else {
        logging::init_from_env();
    }
}

//! abigrab - ABI extraction from contract build artifacts
//!
//! This library walks a build output tree (e.g. a Foundry `out/` directory),
//! classifies each JSON artifact by filename and path, and writes the `abi`
//! field of every interface artifact to its own file in an output directory.
//!
//! # Core Concepts
//!
//! - **Artifact**: a build-output JSON file potentially carrying a top-level
//!   `abi` field
//! - **Classification**: a pure predicate over `(filename, path)` that admits
//!   interface artifacts (`IFoo.json` style names) and rejects anything on a
//!   test, mock, or standard-library path
//! - **Extraction**: a single synchronous pass that parses each eligible
//!   artifact and writes its serialized `abi` value, failing fast on the
//!   first parse or missing-field error
//!
//! # Example Usage
//!
//! ```no_run
//! use abigrab::Extractor;
//! use std::path::PathBuf;
//!
//! fn extract_abis() -> Result<(), abigrab::ExtractError> {
//!     let extractor = Extractor::new(PathBuf::from("out"), PathBuf::from("abis"));
//!     let summary = extractor.run()?;
//!     println!("wrote {} ABI files", summary.abis_written);
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`extract`]: the recursive extraction pass and its error taxonomy
//! - [`filter`]: artifact eligibility classification

// Public modules
pub mod cli;
pub mod config;
pub mod extract;
pub mod filter;
pub mod util;

// Re-export key types for convenient access
pub use config::{Config, ConfigError};
pub use extract::{ExtractError, ExtractSummary, Extractor};
pub use filter::ArtifactFilter;
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! Recursive ABI extraction over a build artifact tree
//!
//! The [`Extractor`] makes a single synchronous pass over the input
//! directory: every regular file is classified by the [`ArtifactFilter`],
//! each eligible artifact is parsed as JSON, and its top-level `abi` value is
//! written (serialized, plus a trailing newline) to a file of the same name
//! in the output directory.
//!
//! The pass is fail-fast: the first traversal error, JSON parse failure, or
//! missing `abi` field aborts the whole run. Files written before the failure
//! remain on disk; there is no rollback and no per-file recovery.

use crate::filter::ArtifactFilter;
use ignore::WalkBuilder;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Errors that abort an extraction run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Directory traversal failure
    #[error("failed to traverse input directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Directory creation, file read, or file write failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Eligible artifact is not valid JSON
    #[error("invalid JSON in artifact {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Eligible artifact has no top-level `abi` key
    #[error("artifact {} has no top-level \"abi\" field", path.display())]
    MissingAbi { path: PathBuf },
}

/// Counters gathered over one extraction pass.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractSummary {
    /// Regular files seen by the walker
    pub files_walked: usize,

    /// ABI files written to the output directory
    pub abis_written: usize,

    /// Names of the written files, sorted
    pub written: Vec<String>,

    /// Where the ABI files went
    pub output_dir: PathBuf,

    /// Wall-clock duration of the pass
    pub elapsed_ms: u64,
}

/// Walks an input tree and writes one ABI file per eligible artifact.
pub struct Extractor {
    input_dir: PathBuf,
    output_dir: PathBuf,
    filter: ArtifactFilter,
}

impl Extractor {
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
            filter: ArtifactFilter::new(),
        }
    }

    /// Runs the extraction pass.
    ///
    /// Creates the output directory if missing, then walks the input tree.
    /// Re-running over unchanged input overwrites the previous outputs with
    /// identical content.
    pub fn run(&self) -> Result<ExtractSummary, ExtractError> {
        let start = Instant::now();

        fs::create_dir_all(&self.output_dir).map_err(|source| ExtractError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        info!(
            input = %self.input_dir.display(),
            output = %self.output_dir.display(),
            "Starting artifact scan"
        );

        let mut files_walked = 0;
        let mut written = Vec::new();

        // The classifier is the only filter: hidden files are visible and no
        // gitignore semantics apply to a build output tree.
        for result in WalkBuilder::new(&self.input_dir)
            .hidden(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .build()
        {
            let entry = result?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            files_walked += 1;

            let filename = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name,
                None => continue,
            };

            // Exclusions match the path within the tree, so classification
            // does not depend on where the input directory is mounted.
            let rel_path = path.strip_prefix(&self.input_dir).unwrap_or(path);

            if !self
                .filter
                .is_eligible(filename, &rel_path.to_string_lossy())
            {
                trace!(path = %path.display(), "Skipping non-interface artifact");
                continue;
            }

            self.extract_one(path, filename)?;
            written.push(filename.to_string());
        }

        written.sort();

        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            files_walked,
            abis_written = written.len(),
            elapsed_ms,
            "Extraction complete"
        );

        Ok(ExtractSummary {
            files_walked,
            abis_written: written.len(),
            written,
            output_dir: self.output_dir.clone(),
            elapsed_ms,
        })
    }

    fn extract_one(&self, path: &Path, filename: &str) -> Result<(), ExtractError> {
        let contents = fs::read_to_string(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let artifact: Value =
            serde_json::from_str(&contents).map_err(|source| ExtractError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let abi = artifact.get("abi").ok_or_else(|| ExtractError::MissingAbi {
            path: path.to_path_buf(),
        })?;

        // The value is opaque: serialized back out verbatim, not validated.
        let serialized = serde_json::to_string(abi).map_err(|source| ExtractError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let out_path = self.output_dir.join(filename);
        fs::write(&out_path, format!("{}\n", serialized)).map_err(|source| ExtractError::Io {
            path: out_path.clone(),
            source,
        })?;

        debug!(
            artifact = %path.display(),
            abi = %out_path.display(),
            "Wrote ABI file"
        );

        Ok(())
    }
}

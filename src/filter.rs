//! Artifact eligibility classification
//!
//! A build output tree mixes interface artifacts with implementation
//! contracts, test doubles, and compiler-bundled standard-library artifacts.
//! Only interface artifacts are worth extracting, so classification is a
//! pure predicate over `(filename, full path)`:
//!
//! - the filename must look like an interface artifact: uppercase `I`
//!   followed by another uppercase letter, ending in `.json` (`IToken.json`)
//! - the full path must not contain `std`, `vm`, or `console`
//!   (case-insensitive)
//! - the full path must not contain `test` or `mock` (case-insensitive)
//!
//! Exclusions run against the full path string, not the bare filename, so a
//! cleanly named artifact inside a `Std/` or `test/` directory is rejected.

use regex::Regex;

/// Classifies artifact files by filename and path pattern.
///
/// Patterns are compiled once at construction and the predicate itself does
/// no I/O, so a single filter can classify an entire tree.
#[derive(Debug)]
pub struct ArtifactFilter {
    interface: Regex,
    stdlib: Regex,
    test: Regex,
    mock: Regex,
}

impl ArtifactFilter {
    pub fn new() -> Self {
        // Pattern literals are fixed, so compilation cannot fail.
        Self {
            interface: Regex::new(r"^I[A-Z].*\.json$").unwrap(),
            stdlib: Regex::new(r"(?i)std|vm|console").unwrap(),
            test: Regex::new(r"(?i)test").unwrap(),
            mock: Regex::new(r"(?i)mock").unwrap(),
        }
    }

    /// Returns true if the file should have its ABI extracted.
    ///
    /// `filename` is the bare file name, `full_path` the path string for the
    /// file within the scanned tree (directory components plus filename, so a
    /// `Test` or `Mock` marker in the name itself also excludes the file).
    pub fn is_eligible(&self, filename: &str, full_path: &str) -> bool {
        self.interface.is_match(filename)
            && !self.stdlib.is_match(full_path)
            && !self.test.is_match(full_path)
            && !self.mock.is_match(full_path)
    }
}

impl Default for ArtifactFilter {
    fn default() -> Self {
        Self::new()
    }
}

//! Changelog section extraction
//!
//! Finds the `## ` heading for a version in a changelog and returns that
//! heading together with every line up to the next version heading.
//!
//! - `heading` - Line rules (requested heading, next-section boundary)
//! - `extractor` - The line scanner built on those rules

pub mod extractor;
pub mod heading;

pub use extractor::SectionExtractor;
pub use heading::{normalize_identifier, HeadingRules};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{GtautoError, Result};

/// Default changelog file name, relative to the working directory.
pub const DEFAULT_CHANGELOG: &str = "CHANGELOG.md";

/// Extracts the section for `identifier` from the changelog at `path`.
///
/// The file is closed before this returns, whatever the outcome.
///
/// # Arguments
/// * `identifier` - Version to look for, with or without a leading `v`
/// * `path` - Changelog file to read
///
/// # Returns
/// * `Ok(String)` - The section text
/// * `Err(GtautoError::SectionNotFound)` - The file was read but has no such section
/// * `Err(GtautoError::ChangelogRead)` - The file could not be opened or read
/// * `Err(GtautoError::InvalidVersion)` - The identifier is empty
pub fn extract_section(identifier: &str, path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let extractor = SectionExtractor::new(identifier)?;

    let file = File::open(path).map_err(|e| GtautoError::changelog_read(path, e))?;

    match extractor.extract_from_reader(BufReader::new(file)) {
        Err(GtautoError::Io(e)) => Err(GtautoError::changelog_read(path, e)),
        other => other,
    }
}

use regex::Regex;

use crate::error::{GtautoError, Result};

/// Any `## ` heading that looks like a dotted version number.
///
/// Only used to find where the current section ends.
const BOUNDARY_PATTERN: &str = r"^##\s+\[?v?[0-9]+\.[0-9]+";

/// Strips a single leading lowercase `v` from a version identifier.
///
/// ```ignore
/// assert_eq!(normalize_identifier("v1.0.1"), "1.0.1");
/// assert_eq!(normalize_identifier("1.0.1"), "1.0.1");
/// assert_eq!(normalize_identifier("vv2"), "v2");
/// ```
pub fn normalize_identifier(identifier: &str) -> &str {
    identifier.strip_prefix('v').unwrap_or(identifier)
}

/// The pair of line rules used while scanning a changelog.
#[derive(Debug, Clone)]
pub struct HeadingRules {
    heading: Regex,
    boundary: Regex,
}

impl HeadingRules {
    /// Builds the rules for `identifier`.
    ///
    /// The identifier is normalized and escaped before it is embedded, so the
    /// dots in `1.0.1` only ever match a literal dot. After the identifier the
    /// heading must continue with `]`, whitespace or the end of the line,
    /// which keeps `1.0` from matching a `## [1.0.0]` heading.
    pub fn new(identifier: &str) -> Result<Self> {
        let version = normalize_identifier(identifier);
        if version.is_empty() {
            return Err(GtautoError::invalid_version(format!(
                "'{}' does not name a version",
                identifier
            )));
        }

        let pattern = format!(r"^##\s+\[?v?{}(?:\]|\s|$)", regex::escape(version));
        let heading = Regex::new(&pattern)
            .map_err(|e| GtautoError::invalid_version(format!("{}: {}", identifier, e)))?;
        let boundary = Regex::new(BOUNDARY_PATTERN)
            .map_err(|e| GtautoError::invalid_version(e.to_string()))?;

        Ok(HeadingRules { heading, boundary })
    }

    /// Line opens the requested section.
    pub fn is_heading(&self, line: &str) -> bool {
        self.heading.is_match(line)
    }

    /// Line opens some version section.
    pub fn is_boundary(&self, line: &str) -> bool {
        self.boundary.is_match(line)
    }
}

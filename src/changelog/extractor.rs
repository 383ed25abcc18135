use std::io::BufRead;

use log::debug;

use super::heading::HeadingRules;
use crate::error::{GtautoError, Result};

/// Scanner position while walking the changelog.
#[derive(Debug)]
enum ScanState {
    /// Target heading not seen yet; lines are discarded.
    Searching,
    /// Collecting the heading and the lines after it.
    InSection(Vec<String>),
}

/// Extracts the section of a changelog that belongs to one version.
///
/// A section starts at the first `## ` heading naming the version (with or
/// without a `v` prefix or surrounding brackets) and runs until the next
/// heading that looks like a dotted version number, or the end of the text.
///
/// ```ignore
/// let extractor = SectionExtractor::new("v1.0.1")?;
/// let section = extractor.extract_from_str(&changelog)?;
/// assert!(section.starts_with("## [v1.0.1]"));
/// ```
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    identifier: String,
    rules: HeadingRules,
}

impl SectionExtractor {
    /// Compiles the heading rules for `identifier`.
    ///
    /// # Returns
    /// * `Ok(SectionExtractor)` - Ready to scan any number of documents
    /// * `Err(GtautoError::InvalidVersion)` - If the identifier is empty once normalized
    pub fn new(identifier: &str) -> Result<Self> {
        Ok(SectionExtractor {
            identifier: identifier.to_string(),
            rules: HeadingRules::new(identifier)?,
        })
    }

    /// The identifier as it was requested, before normalization.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Scans `reader` line by line and returns the requested section.
    ///
    /// Scanning stops at the first boundary heading after the section, so the
    /// rest of the input is never read. Bytes that are not valid UTF-8 are
    /// replaced with U+FFFD rather than rejected.
    ///
    /// # Returns
    /// * `Ok(String)` - Heading plus body, trailing empty lines removed
    /// * `Err(GtautoError::SectionNotFound)` - If no line matched the heading rule
    /// * `Err(GtautoError::Io)` - If reading failed
    pub fn extract_from_reader<R: BufRead>(&self, mut reader: R) -> Result<String> {
        let mut state = ScanState::Searching;
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;
            let line = decode_line(&buf);

            state = match state {
                ScanState::Searching => {
                    if self.rules.is_heading(&line) {
                        debug!("Found heading for {} on line {}", self.identifier, line_number);
                        ScanState::InSection(vec![line])
                    } else {
                        ScanState::Searching
                    }
                }
                ScanState::InSection(mut lines) => {
                    if self.rules.is_boundary(&line) {
                        debug!("Section for {} ends at line {}", self.identifier, line_number);
                        return Ok(finish_section(lines));
                    }
                    lines.push(line);
                    ScanState::InSection(lines)
                }
            };
        }

        match state {
            ScanState::Searching => Err(GtautoError::SectionNotFound(self.identifier.clone())),
            ScanState::InSection(lines) => Ok(finish_section(lines)),
        }
    }

    /// Same as [`SectionExtractor::extract_from_reader`] for in-memory text.
    pub fn extract_from_str(&self, text: &str) -> Result<String> {
        self.extract_from_reader(text.as_bytes())
    }
}

/// Strips the `\n` or `\r\n` terminator and decodes lossily.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// Drops trailing empty lines and joins the rest with `\n`.
///
/// Whitespace-only lines are content and are kept.
fn finish_section(mut lines: Vec<String>) -> String {
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

use crate::changelog::normalize_identifier;
use crate::error::{GtautoError, Result};

/// Tag message used when the changelog has no section for the tag.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Release {tag}";

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Version part of the tag (e.g., "v1.2.3" -> "1.2.3")
    pub fn version_part(&self) -> &str {
        normalize_identifier(&self.name)
    }

    /// Checks that the tag names something taggable
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GtautoError::invalid_version("tag name is empty"));
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(GtautoError::invalid_version(format!(
                "tag '{}' contains whitespace",
                self.name
            )));
        }
        if self.version_part().is_empty() {
            return Err(GtautoError::invalid_version(format!(
                "tag '{}' has no version after the 'v' prefix",
                self.name
            )));
        }
        Ok(())
    }

    /// Format the fallback message for this tag
    /// Example: template="Release {tag}", name="v1.2.3" -> "Release v1.2.3"
    pub fn fallback_message(&self, template: &str) -> String {
        template.replace("{tag}", &self.name)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

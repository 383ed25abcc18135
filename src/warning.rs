use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions met while tagging.
/// These are reported to the user but do not stop the workflow on their own.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// A tag with the requested name is already present
    TagExists { tag: String },
    /// The changelog has no section for the tag; the fallback message is used
    ChangelogEntryMissing { tag: String, changelog: PathBuf },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::TagExists { tag } => write!(f, "Tag '{}' already exists", tag),
            Warning::ChangelogEntryMissing { tag, changelog } => write!(
                f,
                "Could not find CHANGELOG entry for '{}' in {}",
                tag,
                changelog.display()
            ),
        }
    }
}

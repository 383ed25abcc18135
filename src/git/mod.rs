//! Git operations abstraction layer
//!
//! The tag workflow only needs a handful of tag operations. They sit behind
//! the [Repository] trait so the workflow can run against a real repository
//! or an in-memory one:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! ```rust,no_run
//! # use gtauto::git::{Git2Repository, Repository};
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = Git2Repository::open(".")?;
//! if !repo.tag_exists("v1.0.0")? {
//!     repo.create_annotated_tag("v1.0.0", "Release v1.0.0", false)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Tag operations used by the tag workflow.
///
/// Implementations map their underlying failures (like `git2::Error`) to
/// [crate::error::GtautoError] variants.
pub trait Repository {
    /// Whether `refs/tags/<name>` exists (lightweight or annotated).
    fn tag_exists(&self, name: &str) -> Result<bool>;

    /// Create an annotated tag on HEAD with `message` as its body.
    ///
    /// With `replace`, an existing tag of the same name is overwritten in a
    /// single reference update; if creation fails the old tag is untouched.
    /// Without it, an existing tag is an error.
    fn create_annotated_tag(&self, name: &str, message: &str, replace: bool) -> Result<()>;

    /// Message of an annotated tag.
    ///
    /// # Returns
    /// * `Ok(Some(String))` - The annotation message
    /// * `Ok(None)` - The tag doesn't exist or is lightweight
    /// * `Err` - If there's a Git error
    fn tag_message(&self, name: &str) -> Result<Option<String>>;

    /// Full hash of the commit HEAD points at.
    fn head_commit_hash(&self) -> Result<String>;
}

use crate::error::{GtautoError, Result};
use git2::{ErrorCode, Repository as Git2Repo};
use log::debug;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    ///
    /// # Returns
    /// * `Ok(Git2Repository)` - `path` is inside a repository
    /// * `Err` - If `path` is not inside a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        debug!("Using repository at {}", repo.path().display());

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn tag_reference(name: &str) -> String {
        format!("refs/tags/{}", name)
    }
}

impl super::Repository for Git2Repository {
    fn tag_exists(&self, name: &str) -> Result<bool> {
        match self.repo.find_reference(&Self::tag_reference(name)) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
            Err(e) => Err(GtautoError::tag(format!("Cannot look up tag '{}': {}", name, e))),
        }
    }

    fn create_annotated_tag(&self, name: &str, message: &str, replace: bool) -> Result<()> {
        let head = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| GtautoError::tag(format!("Cannot resolve HEAD commit: {}", e)))?;

        let tagger = self.repo.signature().map_err(|e| {
            GtautoError::tag(format!(
                "Cannot determine tagger identity (set user.name and user.email): {}",
                e
            ))
        })?;

        // git stores annotation bodies newline-terminated
        let body = if message.ends_with('\n') {
            message.to_string()
        } else {
            format!("{}\n", message)
        };

        let oid = self
            .repo
            .tag(name, head.as_object(), &tagger, &body, replace)
            .map_err(|e| GtautoError::tag(format!("Cannot create tag '{}': {}", name, e)))?;
        debug!(
            "{} tag object {} for {}",
            if replace { "Wrote" } else { "Created" },
            oid,
            name
        );

        Ok(())
    }

    fn tag_message(&self, name: &str) -> Result<Option<String>> {
        let reference = match self.repo.find_reference(&Self::tag_reference(name)) {
            Ok(reference) => reference,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let Some(oid) = reference.target() else {
            return Ok(None);
        };

        let object = self.repo.find_object(oid, None)?;
        Ok(object
            .as_tag()
            .and_then(|tag| tag.message())
            .map(|message| message.trim_end_matches('\n').to_string()))
    }

    fn head_commit_hash(&self) -> Result<String> {
        let commit = self.repo.head()?.peel_to_commit()?;
        Ok(commit.id().to_string())
    }
}

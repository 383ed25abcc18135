use crate::error::{GtautoError, Result};
use crate::git::Repository;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// Mock repository for testing without actual git operations
///
/// Tags live in memory; `None` marks a lightweight tag.
pub struct MockRepository {
    tags: RefCell<BTreeMap<String, Option<String>>>,
    head: String,
    fail_create: Cell<bool>,
    replacements: Cell<usize>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: RefCell::new(BTreeMap::new()),
            head: "0123456789abcdef0123456789abcdef01234567".to_string(),
            fail_create: Cell::new(false),
            replacements: Cell::new(0),
        }
    }

    /// Add an annotated tag
    pub fn add_tag(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.tags
            .get_mut()
            .insert(name.into(), Some(message.into()));
    }

    /// Add a lightweight tag
    pub fn add_lightweight_tag(&mut self, name: impl Into<String>) {
        self.tags.get_mut().insert(name.into(), None);
    }

    /// Make every later `create_annotated_tag` call fail
    pub fn fail_tag_creation(&self) {
        self.fail_create.set(true);
    }

    /// Names of all tags, sorted
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.borrow().keys().cloned().collect()
    }

    /// How many existing tags have been overwritten
    pub fn replacements(&self) -> usize {
        self.replacements.get()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn tag_exists(&self, name: &str) -> Result<bool> {
        Ok(self.tags.borrow().contains_key(name))
    }

    fn create_annotated_tag(&self, name: &str, message: &str, replace: bool) -> Result<()> {
        if self.fail_create.get() {
            return Err(GtautoError::tag(format!("Cannot create tag '{}'", name)));
        }

        let mut tags = self.tags.borrow_mut();
        let existed = tags.contains_key(name);
        if existed && !replace {
            return Err(GtautoError::tag(format!("tag '{}' already exists", name)));
        }
        tags.insert(name.to_string(), Some(message.to_string()));
        if existed {
            self.replacements.set(self.replacements.get() + 1);
        }
        Ok(())
    }

    fn tag_message(&self, name: &str) -> Result<Option<String>> {
        Ok(self.tags.borrow().get(name).cloned().flatten())
    }

    fn head_commit_hash(&self) -> Result<String> {
        Ok(self.head.clone())
    }
}

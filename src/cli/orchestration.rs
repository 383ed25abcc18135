//! Main workflow orchestration logic
//!
//! Keeps CLI argument parsing in `main.rs` apart from the tagging workflow,
//! so the workflow can run against any [Repository] and any confirmation
//! source.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use log::debug;

use crate::changelog::extract_section;
use crate::config::Config;
use crate::domain::Tag;
use crate::git::Repository;
use crate::ui::Printer;
use crate::warning::Warning;

/// Prompt shown before an existing tag is replaced.
pub const OVERWRITE_PROMPT: &str = "Do you want to overwrite it?";

/// Arguments for the tag workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// This decoupling allows the workflow to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct TagWorkflowArgs {
    /// Tag to create, e.g. "v1.0.0"
    pub tag: String,

    /// Changelog path; falls back to the configured one
    pub changelog: Option<PathBuf>,

    /// Replace an existing tag without asking
    pub force: bool,

    /// Preview mode - show the message, don't touch tags
    pub dry_run: bool,
}

/// Tag produced (or previewed) by the workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The tag name
    pub tag: String,

    /// Annotation message
    pub message: String,

    /// Message came from the changelog rather than the fallback template
    pub from_changelog: bool,

    /// An existing tag with the same name was (or would be) replaced
    pub replaced_existing: bool,
}

/// How the workflow ended
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    /// The annotated tag was created
    Created(WorkflowResult),
    /// Dry run: nothing was changed
    DryRun(WorkflowResult),
    /// User declined to overwrite an existing tag
    Cancelled,
}

/// Main tag workflow
///
/// Orchestrates the entire tagging process:
/// 1. Validate the tag name and locate the changelog
/// 2. Ask before replacing an existing tag (unless forced)
/// 3. Extract the changelog section, or fall back to the configured message
/// 4. Show the message, then replace/create the annotated tag
///
/// An existing tag is overwritten in place, so it survives any failure
/// before or during creation.
///
/// # Arguments
///
/// * `args` - Workflow arguments (tag, changelog, force, dry_run)
/// * `config` - Loaded configuration
/// * `repo` - Repository to tag
/// * `printer` - Output formatting
/// * `confirm` - Answers yes/no prompts
///
/// # Returns
///
/// The outcome, or an error for any validation or operational failure
pub fn run_tag_workflow<R, C>(
    args: &TagWorkflowArgs,
    config: &Config,
    repo: &R,
    printer: &Printer,
    mut confirm: C,
) -> Result<WorkflowOutcome>
where
    R: Repository + ?Sized,
    C: FnMut(&str) -> Result<bool>,
{
    let tag = Tag::new(args.tag.as_str());
    tag.validate()?;

    let changelog = args
        .changelog
        .clone()
        .unwrap_or_else(|| config.changelog.path.clone());
    if !changelog.is_file() {
        bail!("CHANGELOG file not found: {}", changelog.display());
    }
    debug!("Using changelog {}", changelog.display());

    let exists = repo
        .tag_exists(&tag.name)
        .with_context(|| format!("Failed to check whether tag '{}' exists", tag))?;

    if exists && !args.force && config.behavior.confirm_overwrite {
        printer.boundary_warning(&Warning::TagExists {
            tag: tag.name.clone(),
        });
        if !confirm(OVERWRITE_PROMPT)? {
            printer.status("Operation cancelled");
            return Ok(WorkflowOutcome::Cancelled);
        }
    }

    printer.status(&format!("Extracting CHANGELOG entry for '{}'...", tag));
    let (message, from_changelog) = match extract_section(&tag.name, &changelog) {
        Ok(section) => {
            printer.success("Found CHANGELOG entry");
            (section, true)
        }
        Err(e) if e.is_not_found() => {
            printer.boundary_warning(&Warning::ChangelogEntryMissing {
                tag: tag.name.clone(),
                changelog: changelog.clone(),
            });
            (tag.fallback_message(&config.tag.fallback_message), false)
        }
        Err(e) => return Err(e.into()),
    };

    printer.tag_message_preview(&message);

    let result = WorkflowResult {
        tag: tag.name.clone(),
        message,
        from_changelog,
        replaced_existing: exists,
    };

    if args.dry_run {
        printer.status(&format!("Dry run: tag '{}' was not created", tag));
        return Ok(WorkflowOutcome::DryRun(result));
    }

    let head = repo
        .head_commit_hash()
        .context("Failed to resolve HEAD commit")?;
    let short_head = head.get(..7).unwrap_or(head.as_str());

    printer.status(&format!("Creating tag '{}'...", tag));
    repo.create_annotated_tag(&tag.name, &result.message, exists)
        .context("Failed to create tag")?;
    debug!(
        "{} annotated tag {}",
        if exists { "Replaced" } else { "Created" },
        tag
    );

    printer.success(&format!("Tag '{}' created successfully at {}", tag, short_head));
    printer.push_instructions(&tag.name, &config.tag.remote);

    Ok(WorkflowOutcome::Created(result))
}

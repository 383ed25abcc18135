// tests/integration_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use gtauto::git::{Git2Repository, Repository};
use tempfile::TempDir;

const CHANGELOG: &str = "# Changelog

## [v1.0.1] - 2025-08-27

### Fixed
- Bug fix 1

## [v1.0.0] - 2025-08-26

### Added
- Initial release
";

fn gtauto(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gtauto"))
        .args(args)
        .arg("--color=never")
        .current_dir(dir)
        .output()
        .expect("Failed to execute gtauto")
}

fn init_repo() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let repo = git2::Repository::init(dir.path()).unwrap();

    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test Author").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();

    let sig = repo.signature().unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "initial commit", &tree, &[])
        .unwrap();

    fs::write(dir.path().join("CHANGELOG.md"), CHANGELOG).unwrap();
    dir
}

#[test]
fn test_gtauto_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_gtauto"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("gtauto"));
    assert!(stdout.contains("--tag"));
    assert!(stdout.contains("--changelog"));
    assert!(stdout.contains("--force"));
}

#[test]
fn test_gtauto_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_gtauto"))
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_tag_argument_fails() {
    let dir = init_repo();
    let output = gtauto(dir.path(), &[]);
    assert!(!output.status.success());
}

#[test]
fn test_outside_git_repository_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("CHANGELOG.md"), CHANGELOG).unwrap();

    let output = gtauto(dir.path(), &["--tag", "v1.0.1"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not a git repository"), "stderr: {}", stderr);
}

#[test]
fn test_missing_changelog_fails() {
    let dir = init_repo();
    let output = gtauto(dir.path(), &["--tag", "v1.0.1", "--changelog", "NOPE.md"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CHANGELOG file not found"), "stderr: {}", stderr);
}

#[test]
fn test_creates_annotated_tag_from_changelog() {
    let dir = init_repo();
    let output = gtauto(dir.path(), &["--tag", "v1.0.1"]);

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Tag 'v1.0.1' created successfully"));
    assert!(stdout.contains("git push origin v1.0.1"));

    let repo = Git2Repository::open(dir.path()).unwrap();
    assert_eq!(
        repo.tag_message("v1.0.1").unwrap().as_deref(),
        Some("## [v1.0.1] - 2025-08-27\n\n### Fixed\n- Bug fix 1")
    );
}

#[test]
fn test_unknown_version_uses_fallback_message() {
    let dir = init_repo();
    let output = gtauto(dir.path(), &["--tag", "v9.0.0"]);

    assert!(output.status.success(), "{:?}", output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not find CHANGELOG entry"), "stderr: {}", stderr);

    let repo = Git2Repository::open(dir.path()).unwrap();
    assert_eq!(
        repo.tag_message("v9.0.0").unwrap().as_deref(),
        Some("Release v9.0.0")
    );
}

#[test]
fn test_existing_tag_declined_on_stdin() {
    let dir = init_repo();
    let repo = Git2Repository::open(dir.path()).unwrap();
    repo.create_annotated_tag("v1.0.0", "old message", false).unwrap();

    // stdin is empty, which declines the prompt
    let output = Command::new(env!("CARGO_BIN_EXE_gtauto"))
        .args(["--tag", "v1.0.0", "--color=never"])
        .current_dir(dir.path())
        .stdin(std::process::Stdio::null())
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Operation cancelled"));
    assert_eq!(
        repo.tag_message("v1.0.0").unwrap().as_deref(),
        Some("old message")
    );
}

#[test]
fn test_force_overwrites_existing_tag() {
    let dir = init_repo();
    let repo = Git2Repository::open(dir.path()).unwrap();
    repo.create_annotated_tag("v1.0.0", "old message", false).unwrap();

    let output = gtauto(dir.path(), &["--tag", "v1.0.0", "--force"]);

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        repo.tag_message("v1.0.0").unwrap().as_deref(),
        Some("## [v1.0.0] - 2025-08-26\n\n### Added\n- Initial release")
    );
}

#[test]
fn test_dry_run_creates_nothing() {
    let dir = init_repo();
    let output = gtauto(dir.path(), &["--tag", "v1.0.1", "--dry-run"]);

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("- Bug fix 1"));

    let repo = Git2Repository::open(dir.path()).unwrap();
    assert!(!repo.tag_exists("v1.0.1").unwrap());
}

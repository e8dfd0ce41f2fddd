//! Thin wrappers around the `git` binary used after a version bump.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};
use winhelper_common::config::ReleaseConfig;
use winhelper_common::error::GitError;

/// Stages `files` (or everything when empty) and commits them.
pub fn commit_changes<P: AsRef<Path>>(repo: &Path, message: &str, files: &[P]) -> Result<(), GitError> {
    if files.is_empty() {
        run(repo, &["add", "."])?;
    } else {
        for file in files {
            let file = file.as_ref().to_string_lossy();
            run(repo, &["add", &file])?;
        }
    }

    run(repo, &["commit", "-m", message])?;
    info!("Committed: {message}");
    Ok(())
}

/// Creates an annotated tag and pushes all tags to `origin`.
pub fn tag_and_push(repo: &Path, tag: &str, message: &str) -> Result<(), GitError> {
    run(repo, &["tag", "-a", tag, "-m", message])?;
    run(repo, &["push", "origin", "--tags"])?;
    info!("Tagged and pushed {tag}");
    Ok(())
}

/// Commits the bump from `previous` to `next`, then tags and pushes `next`.
///
/// Does nothing unless `cfg.push_git` is set.
pub fn release<P: AsRef<Path>>(
    cfg: &ReleaseConfig,
    previous: &str,
    next: &str,
    files: &[P],
) -> Result<(), GitError> {
    if !cfg.push_git {
        return Ok(());
    }

    let message = cfg
        .message
        .clone()
        .unwrap_or_else(|| bump_message(previous, next));

    commit_changes(&cfg.repo_dir, &message, files)?;
    tag_and_push(&cfg.repo_dir, next, &message)
}

pub fn bump_message(previous: &str, next: &str) -> String {
    format!("update version {previous} --> {next}")
}

fn run(repo: &Path, args: &[&str]) -> Result<(), GitError> {
    let command = format!("git {}", args.join(" "));
    debug!("Running `{command}` in {}", repo.display());

    let status = Command::new("git")
        .args(args)
        .current_dir(repo)
        .status()
        .map_err(|source| GitError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !status.success() {
        return Err(GitError::Failed { command, status });
    }
    Ok(())
}

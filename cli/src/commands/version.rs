use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use winhelper_common::config::ReleaseConfig;
use winhelper_common::error::VersionError;
use winhelper_core::git;
use winhelper_core::version::{VERSION_FILE, VersionManager};

use crate::commands::VersionArgs;
use crate::terminal::colors;
use crate::terminal::input::Confirm;
use crate::terminal::print;
use colored::*;

pub fn version(args: VersionArgs, confirm: &dyn Confirm) -> anyhow::Result<()> {
    let dir: PathBuf = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine the current directory")?,
    };
    let path: PathBuf = dir.join(VERSION_FILE);

    let mut manager = if path.exists() {
        VersionManager::load(&dir)?
    } else {
        VersionManager::new()
    };
    let previous: String = manager.version().to_string();

    let Some(op) = args.op else {
        if !manager.is_set() {
            bail!("no version file at {}", path.display());
        }
        print::print_status(format!("current version {}", previous.color(colors::VERSION).bold()));
        return Ok(());
    };

    manager
        .set_version(&op)
        .with_context(|| format!("cannot apply {op:?} to {previous:?}"))?;
    let next: String = manager.version().to_string();

    save(&manager, &dir, args.force, confirm)?;

    if previous.is_empty() {
        print::print_status(format!("initialized version {}", next.color(colors::VERSION).bold()));
    } else {
        print::version_change(&previous, &next);
    }

    let release = ReleaseConfig {
        push_git: args.release.push_git,
        message: args.release.git_message,
        repo_dir: dir,
    };
    git::release(&release, &previous, &next, &[path])?;
    Ok(())
}

/// Saves, asking before an existing file is replaced.
fn save(manager: &VersionManager, dir: &Path, force: bool, confirm: &dyn Confirm) -> anyhow::Result<PathBuf> {
    match manager.save(dir, force) {
        Err(VersionError::AlreadyExists(path)) => {
            if confirm.confirm(&format!("{} already exists, overwrite?", path.display())) {
                Ok(manager.save(dir, true)?)
            } else {
                bail!("left {} unchanged", path.display());
            }
        }
        other => Ok(other?),
    }
}

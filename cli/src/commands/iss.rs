use std::path::{Path, PathBuf};

use anyhow::Context;
use winhelper_common::config::ReleaseConfig;
use winhelper_core::git;
use winhelper_core::version::{VersionManager, iss};

use crate::commands::IssArgs;
use crate::terminal::print;

pub fn iss(args: IssArgs) -> anyhow::Result<()> {
    let previous: String = iss::current_version(&args.iss_path)?;

    let mut manager = VersionManager::with_version(previous.clone());
    manager
        .set_version(&args.op)
        .with_context(|| format!("cannot apply {:?} to {previous:?}", args.op))?;
    let next: String = manager.version().to_string();

    iss::save_version(&args.iss_path, &next)?;
    print::version_change(&previous, &next);

    let repo_dir: PathBuf = match args.iss_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let release = ReleaseConfig {
        push_git: args.release.push_git,
        message: args.release.git_message,
        repo_dir,
    };
    git::release::<&Path>(&release, &previous, &next, &[])?;
    Ok(())
}

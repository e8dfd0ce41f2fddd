use std::path::PathBuf;

use anyhow::Context;
use winhelper_core::link::make_link;

use crate::commands::LinkArgs;
use crate::terminal::print;

pub fn link(args: LinkArgs) -> anyhow::Result<()> {
    let base: PathBuf = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine the current directory")?,
    };

    let created = make_link(&base, &args.original, &args.link)?;
    print::print_status(format!(
        "{} -> {}",
        created.display(),
        base.join(&args.original).display()
    ));
    Ok(())
}

use anyhow::bail;
use colored::*;
use winhelper_core::wake as wol;

use crate::commands::WakeArgs;
use crate::terminal::{colors, print};

pub fn wake(args: WakeArgs) -> anyhow::Result<()> {
    let broadcast = args.broadcast.to_string();

    if !wol::wake_on_lan(&args.mac, &broadcast, args.port) {
        bail!("failed to send magic packet to {}", args.mac);
    }

    print::print_status(format!(
        "Magic packet for {} sent to {}:{}",
        args.mac.color(colors::MAC_ADDR),
        broadcast.color(colors::IPV4_ADDR),
        args.port
    ));
    Ok(())
}

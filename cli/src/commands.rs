pub mod iss;
pub mod link;
pub mod scan;
pub mod version;
pub mod wake;

use std::net::Ipv4Addr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use winhelper_common::config::{DEFAULT_WOL_BROADCAST, DEFAULT_WOL_PORT};

#[derive(Parser)]
#[command(name = "winhelper")]
#[command(version, about = "Helpers for setting up and releasing from a workstation.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print results and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show or adjust the version stored in a VERSION file
    #[command(alias = "v")]
    Version(VersionArgs),
    /// Adjust the MyAppVersion define of an Inno-Setup script
    #[command(alias = "update-iss")]
    Iss(IssArgs),
    /// Send a Wake-on-LAN magic packet
    #[command(alias = "wake-on-lan")]
    Wake(WakeArgs),
    /// Ping every address of the local /24 networks and list who answered
    #[command(alias = "scan-mac")]
    Scan(ScanArgs),
    /// Create a symbolic link
    #[command(alias = "mklink")]
    Link(LinkArgs),
}

#[derive(Args)]
pub struct ReleaseArgs {
    /// Commit, tag and push after updating the version
    #[arg(long, env = "WH_PUSH_GIT")]
    pub push_git: bool,

    /// Commit and tag message (defaults to "update version OLD --> NEW")
    #[arg(short = 'm', long = "git-message")]
    pub git_message: Option<String>,
}

#[derive(Args)]
pub struct VersionArgs {
    /// Operator (+++, ---, ++, --, +, -, =) or, for a new file, the initial version.
    /// Without it the current version is printed.
    #[arg(allow_hyphen_values = true)]
    pub op: Option<String>,

    /// Directory holding the VERSION file
    #[arg(short, long, env = "WH_VERSION_DIR")]
    pub dir: Option<PathBuf>,

    /// Overwrite an existing VERSION file without asking
    #[arg(short, long)]
    pub force: bool,

    #[command(flatten)]
    pub release: ReleaseArgs,
}

#[derive(Args)]
pub struct IssArgs {
    /// Path to the Inno-Setup script
    #[arg(long = "iss-path", env = "WH_ISS_PATH")]
    pub iss_path: PathBuf,

    /// Version operator (+++, ---, ++, --, +, -, =)
    #[arg(short, long, default_value = "+", allow_hyphen_values = true)]
    pub op: String,

    #[command(flatten)]
    pub release: ReleaseArgs,
}

#[derive(Args)]
pub struct WakeArgs {
    /// Hardware address of the machine to wake, e.g. 1C:83:41:78:28:F5
    pub mac: String,

    /// Broadcast address the packet is sent to
    #[arg(short, long, env = "WH_WOL_BROADCAST", default_value_t = DEFAULT_WOL_BROADCAST)]
    pub broadcast: Ipv4Addr,

    /// UDP port
    #[arg(short, long, env = "WH_WOL_PORT", default_value_t = DEFAULT_WOL_PORT)]
    pub port: u16,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Networks to sweep (CIDR, or an address widened to its /24).
    /// Defaults to the /24 of every local interface.
    #[arg(short, long = "range", value_delimiter = ',')]
    pub ranges: Vec<String>,

    /// Per-host echo timeout in milliseconds
    #[arg(short, long = "timeout", env = "WH_SCAN_TIMEOUT", default_value_t = 1_000)]
    pub timeout_ms: u64,

    /// Maximum number of probes in flight (unbounded when omitted)
    #[arg(short = 'c', long, env = "WH_SCAN_CONCURRENCY")]
    pub max_concurrency: Option<usize>,

    /// Report the MAC found in the neighbour (ARP) cache instead of the local interface's
    #[arg(long)]
    pub neighbor: bool,
}

#[derive(Args)]
pub struct LinkArgs {
    /// Existing file or directory
    #[arg(short, long = "oldname")]
    pub original: PathBuf,

    /// Path of the link to create
    #[arg(short, long = "newname")]
    pub link: PathBuf,

    /// Base directory for relative paths (defaults to the current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_is_well_formed() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn version_accepts_minus_operators() {
        let cli = CommandLine::try_parse_from(["winhelper", "version", "---"]).unwrap();
        match cli.command {
            Commands::Version(args) => assert_eq!(args.op.as_deref(), Some("---")),
            _ => panic!("expected the version command"),
        }
    }

    #[test]
    fn scan_ranges_split_on_commas() {
        let cli = CommandLine::try_parse_from([
            "winhelper",
            "scan",
            "--range",
            "10.0.0.0/24,192.168.1.0/24",
        ])
        .unwrap();
        match cli.command {
            Commands::Scan(args) => assert_eq!(args.ranges.len(), 2),
            _ => panic!("expected the scan command"),
        }
    }

    #[test]
    fn wake_defaults() {
        let cli = CommandLine::try_parse_from(["winhelper", "wake", "1C:83:41:78:28:F5"]).unwrap();
        match cli.command {
            Commands::Wake(args) => {
                assert_eq!(args.port, 9);
                assert_eq!(args.broadcast, Ipv4Addr::BROADCAST);
            }
            _ => panic!("expected the wake command"),
        }
    }
}

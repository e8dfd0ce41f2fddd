use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(1_000);
pub const DEFAULT_WOL_PORT: u16 = 9;
pub const DEFAULT_WOL_BROADCAST: Ipv4Addr = Ipv4Addr::BROADCAST;

/// Where a responding host's hardware address is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MacSource {
    /// Record the MAC of the *local* interface whose subnet contains the target.
    /// Not the remote host's MAC.
    #[default]
    LocalInterface,
    /// Look the target up in the operating system's neighbour (ARP) cache.
    NeighborTable,
}

pub struct ScanConfig {
    /// Upper bound on how long a single ICMP echo may take.
    pub probe_timeout: Duration,
    /// Caps the number of in-flight probes. `None` launches one task per
    /// address with no ceiling.
    pub max_concurrency: Option<usize>,
    pub mac_source: MacSource,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            max_concurrency: None,
            mac_source: MacSource::default(),
        }
    }
}

/// Optional git bookkeeping performed after a version bump.
#[derive(Debug, Clone, Default)]
pub struct ReleaseConfig {
    pub push_git: bool,
    /// Overrides the generated `update version a --> b` commit message.
    pub message: Option<String>,
    /// Repository the git commands run in.
    pub repo_dir: PathBuf,
}

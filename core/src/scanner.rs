//! Subnet sweep correlating ICMP echo replies to hardware addresses.
//!
//! Every address of every requested range gets its own task. A task probes
//! its target through a [`Prober`], asks a [`MacResolver`] for a hardware
//! address when the host answered, and records the pair in a shared map.
//! Probe failures never leave this module; an unreachable host is simply
//! missing from the [`ScanResult`].
//!
//! **Note on MAC values:** with [`MacSource::LocalInterface`] (the default)
//! the recorded MAC belongs to the scanning host's interface on the target's
//! subnet, not to the target itself.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use pnet::ipnetwork::Ipv4Network;
use pnet::util::MacAddr;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, trace, warn};
use winhelper_common::config::{MacSource, ScanConfig};
use winhelper_common::error::ProbeError;
use winhelper_common::network::interface::{self, InterfaceProvider, SystemInterfaces};
use winhelper_common::network::range::Ipv4Range;

mod icmp;
mod resolver;

pub use icmp::IcmpProber;
pub use resolver::{LocalInterfaceResolver, NeighborTableResolver};

/// Sends a single liveness probe to one address.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, target: Ipv4Addr) -> Result<(), ProbeError>;
}

/// Picks the hardware address recorded for a host that answered.
#[async_trait]
pub trait MacResolver: Send + Sync {
    async fn resolve(&self, target: Ipv4Addr) -> Option<MacAddr>;
}

/// Responding addresses and the MAC recorded for each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    hosts: HashMap<Ipv4Addr, MacAddr>,
}

impl ScanResult {
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn get(&self, ip: &Ipv4Addr) -> Option<&MacAddr> {
        self.hosts.get(ip)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ipv4Addr, &MacAddr)> {
        self.hosts.iter()
    }

    /// Entries ordered by address, for display.
    pub fn sorted(&self) -> Vec<(Ipv4Addr, MacAddr)> {
        let mut entries: Vec<(Ipv4Addr, MacAddr)> =
            self.hosts.iter().map(|(ip, mac)| (*ip, *mac)).collect();
        entries.sort_by_key(|(ip, _)| *ip);
        entries
    }

    pub fn into_inner(self) -> HashMap<Ipv4Addr, MacAddr> {
        self.hosts
    }
}

impl From<HashMap<Ipv4Addr, MacAddr>> for ScanResult {
    fn from(hosts: HashMap<Ipv4Addr, MacAddr>) -> Self {
        Self { hosts }
    }
}

type SharedHosts = Arc<Mutex<HashMap<Ipv4Addr, MacAddr>>>;

/// Lists the /24 blocks of every up, non-loopback local interface.
pub fn enumerate_local_ranges() -> Vec<Ipv4Network> {
    local_ranges(&SystemInterfaces)
}

pub fn local_ranges(provider: &dyn InterfaceProvider) -> Vec<Ipv4Network> {
    interface::local_scan_ranges(&provider.interfaces())
}

pub struct NetworkScanner {
    prober: Arc<dyn Prober>,
    resolver: Arc<dyn MacResolver>,
    max_concurrency: Option<usize>,
}

impl NetworkScanner {
    /// Builds a scanner probing over ICMP and reading system interfaces.
    ///
    /// Must be called from within a tokio runtime, the ICMP socket registers
    /// with its reactor.
    pub fn new(cfg: &ScanConfig) -> Self {
        let prober: Arc<dyn Prober> = Arc::new(IcmpProber::new(cfg.probe_timeout));
        let resolver: Arc<dyn MacResolver> = match cfg.mac_source {
            MacSource::LocalInterface => Arc::new(LocalInterfaceResolver::new(SystemInterfaces)),
            MacSource::NeighborTable => Arc::new(NeighborTableResolver),
        };

        Self::with_parts(prober, resolver, cfg.max_concurrency)
    }

    pub fn with_parts(
        prober: Arc<dyn Prober>,
        resolver: Arc<dyn MacResolver>,
        max_concurrency: Option<usize>,
    ) -> Self {
        Self {
            prober,
            resolver,
            max_concurrency,
        }
    }

    /// Probes every address of every range and waits for all of them.
    ///
    /// Ranges are swept one after the other; the addresses of a range are
    /// probed concurrently.
    pub async fn scan_network(&self, ranges: &[Ipv4Network]) -> ScanResult {
        let hosts: SharedHosts = Arc::new(Mutex::new(HashMap::new()));
        let limiter: Option<Arc<Semaphore>> = self
            .max_concurrency
            .map(|limit| Arc::new(Semaphore::new(limit.max(1))));

        for network in ranges {
            let range = Ipv4Range::from(*network);
            info!("Scanning {network} ({} addresses)", range.len());

            let mut tasks: JoinSet<()> = JoinSet::new();
            for target in range.to_iter() {
                let prober = Arc::clone(&self.prober);
                let resolver = Arc::clone(&self.resolver);
                let hosts = Arc::clone(&hosts);
                let limiter = limiter.clone();

                tasks.spawn(async move {
                    let _permit = match limiter {
                        Some(semaphore) => semaphore.acquire_owned().await.ok(),
                        None => None,
                    };
                    probe_host(target, prober, resolver, hosts).await;
                });
            }

            while let Some(joined) = tasks.join_next().await {
                if let Err(e) = joined {
                    warn!("Probe task ended abnormally: {e}");
                }
            }
        }

        let hosts = match Arc::try_unwrap(hosts) {
            Ok(mutex) => mutex.into_inner().unwrap_or_else(PoisonError::into_inner),
            Err(shared) => shared.lock().unwrap_or_else(PoisonError::into_inner).clone(),
        };

        info!("Scan finished, {} hosts answered", hosts.len());
        ScanResult::from(hosts)
    }
}

async fn probe_host(
    target: Ipv4Addr,
    prober: Arc<dyn Prober>,
    resolver: Arc<dyn MacResolver>,
    hosts: SharedHosts,
) {
    if let Err(e) = prober.probe(target).await {
        trace!("{target}: {e}");
        return;
    }

    let Some(mac) = resolver.resolve(target).await else {
        debug!("{target} answered but no MAC could be attributed");
        return;
    };

    debug!("{target} answered, recording {mac}");
    hosts
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(target, mac);
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

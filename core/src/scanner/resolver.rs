use std::net::Ipv4Addr;

use async_trait::async_trait;
use pnet::util::MacAddr;
use tracing::debug;
use winhelper_common::network::interface::{self, InterfaceProvider};
use winhelper_common::network::mac;

use super::MacResolver;

#[cfg(target_os = "linux")]
const PROC_ARP: &str = "/proc/net/arp";

/// Attributes a reply to the local interface whose subnet holds the target.
///
/// Interfaces are re-read for every reply.
pub struct LocalInterfaceResolver<P> {
    provider: P,
}

impl<P: InterfaceProvider> LocalInterfaceResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: InterfaceProvider> MacResolver for LocalInterfaceResolver<P> {
    async fn resolve(&self, target: Ipv4Addr) -> Option<MacAddr> {
        let interfaces = self.provider.interfaces();
        let owner = interface::find_owner(&interfaces, target)?;
        owner.mac
    }
}

/// Looks the target up in the operating system's neighbour cache.
///
/// The cache is populated by the echo exchange itself, so it is read after
/// the reply arrived.
pub struct NeighborTableResolver;

#[async_trait]
impl MacResolver for NeighborTableResolver {
    async fn resolve(&self, target: Ipv4Addr) -> Option<MacAddr> {
        match read_neighbor(target).await {
            Ok(found) => found,
            Err(e) => {
                debug!("Neighbour table lookup for {target} failed: {e}");
                None
            }
        }
    }
}

#[cfg(target_os = "linux")]
async fn read_neighbor(target: Ipv4Addr) -> std::io::Result<Option<MacAddr>> {
    let table = tokio::fs::read_to_string(PROC_ARP).await?;
    Ok(parse_proc_arp(&table, target))
}

#[cfg(not(target_os = "linux"))]
async fn read_neighbor(target: Ipv4Addr) -> std::io::Result<Option<MacAddr>> {
    let output = tokio::process::Command::new("arp")
        .arg("-a")
        .arg(target.to_string())
        .output()
        .await?;
    Ok(parse_arp_output(&String::from_utf8_lossy(&output.stdout), target))
}

/// Parses the kernel's `IP address  HW type  Flags  HW address  Mask  Device` table.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_proc_arp(table: &str, target: Ipv4Addr) -> Option<MacAddr> {
    table.lines().skip(1).find_map(|line| {
        let columns: Vec<&str> = line.split_whitespace().collect();
        let ip: Ipv4Addr = columns.first()?.parse().ok()?;
        if ip != target {
            return None;
        }
        usable(mac::parse_mac(columns.get(3)?).ok()?)
    })
}

/// Parses `arp -a` output from Windows or BSD-style tools.
#[cfg_attr(target_os = "linux", allow(dead_code))]
fn parse_arp_output(output: &str, target: Ipv4Addr) -> Option<MacAddr> {
    let needle = target.to_string();
    output
        .lines()
        .filter(|line| {
            line.split(|c: char| c.is_whitespace() || c == '(' || c == ')')
                .any(|token| token == needle)
        })
        .find_map(|line| {
            line.split_whitespace()
                .find_map(|token| mac::parse_mac(token).ok())
                .and_then(usable)
        })
}

fn usable(mac: MacAddr) -> Option<MacAddr> {
    (mac != MacAddr::zero()).then_some(mac)
}

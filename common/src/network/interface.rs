use std::net::Ipv4Addr;

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network};
use tracing::debug;

use crate::network::range;

/// Source of the host's network interfaces.
///
/// The scanner asks again on every reply, so implementations should not cache.
pub trait InterfaceProvider: Send + Sync {
    fn interfaces(&self) -> Vec<NetworkInterface>;
}

/// Reads interfaces straight from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInterfaces;

impl InterfaceProvider for SystemInterfaces {
    fn interfaces(&self) -> Vec<NetworkInterface> {
        datalink::interfaces()
    }
}

pub trait NetworkInterfaceExtension {
    fn get_ipv4_nets(&self) -> Vec<Ipv4Network>;
    fn is_scannable(&self) -> bool;
}

impl NetworkInterfaceExtension for NetworkInterface {
    fn get_ipv4_nets(&self) -> Vec<Ipv4Network> {
        self.ips
            .iter()
            .filter_map(|ip| {
                if let IpNetwork::V4(ipv4) = ip {
                    Some(*ipv4)
                } else {
                    None
                }
            })
            .collect()
    }

    fn is_scannable(&self) -> bool {
        self.is_up() && !self.is_loopback()
    }
}

/// Widens every IPv4 address on every up, non-loopback interface to a /24.
///
/// Duplicates are dropped; the first occurrence keeps its position.
pub fn local_scan_ranges(interfaces: &[NetworkInterface]) -> Vec<Ipv4Network> {
    let mut ranges: Vec<Ipv4Network> = Vec::new();

    let candidates = interfaces
        .iter()
        .filter(|iface| {
            let scannable = iface.is_scannable();
            if !scannable {
                debug!("Skipping interface {} (down or loopback)", iface.name);
            }
            scannable
        })
        .flat_map(|iface| iface.get_ipv4_nets())
        .filter(|net| !net.ip().is_loopback())
        .map(|net| range::widen_to_scan_block(net.ip()));

    for net in candidates {
        if !ranges.contains(&net) {
            ranges.push(net);
        }
    }

    ranges
}

/// First interface with a configured IPv4 subnet containing `target`.
pub fn find_owner(interfaces: &[NetworkInterface], target: Ipv4Addr) -> Option<&NetworkInterface> {
    interfaces.iter().find(|iface| {
        iface
            .get_ipv4_nets()
            .iter()
            .any(|net| net.contains(target))
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

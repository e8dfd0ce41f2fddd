use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::Arc;

use async_trait::async_trait;
use pnet::datalink::MacAddr;
use winhelper_common::error::ProbeError;
use winhelper_core::scanner::{self, LocalInterfaceResolver, NetworkScanner, Prober};

use crate::util::{StaticInterfaces, workstation};

/// Answers for a fixed set of addresses, times out for everything else.
struct Responders(HashSet<Ipv4Addr>);

#[async_trait]
impl Prober for Responders {
    async fn probe(&self, target: Ipv4Addr) -> Result<(), ProbeError> {
        if self.0.contains(&target) {
            Ok(())
        } else {
            Err(ProbeError::Timeout)
        }
    }
}

#[test]
fn local_ranges_cover_every_active_interface() {
    let ranges = scanner::local_ranges(&StaticInterfaces(workstation()));
    let ranges: Vec<String> = ranges.iter().map(|r| r.to_string()).collect();

    assert_eq!(ranges, vec!["192.168.0.0/24", "10.201.127.0/24"]);
}

#[tokio::test]
async fn replies_are_recorded_with_the_facing_interface_mac() {
    let interfaces = StaticInterfaces(workstation());
    let ranges = scanner::local_ranges(&interfaces);

    let responders: HashSet<Ipv4Addr> = [
        Ipv4Addr::new(192, 168, 0, 1),
        Ipv4Addr::new(192, 168, 0, 77),
        Ipv4Addr::new(10, 201, 127, 1),
    ]
    .into_iter()
    .collect();

    let scanner = NetworkScanner::with_parts(
        Arc::new(Responders(responders)),
        Arc::new(LocalInterfaceResolver::new(interfaces)),
        None,
    );
    let result = scanner.scan_network(&ranges).await;

    let enp9s0 = MacAddr::new(0xa8, 0xa1, 0x59, 0x13, 0x41, 0x46);
    let wlan0 = MacAddr::new(0x34, 0xcf, 0xf6, 0x9a, 0x11, 0x22);
    assert_eq!(
        result.sorted(),
        vec![
            (Ipv4Addr::new(10, 201, 127, 1), wlan0),
            (Ipv4Addr::new(192, 168, 0, 1), enp9s0),
            (Ipv4Addr::new(192, 168, 0, 77), enp9s0),
        ]
    );
}

#[tokio::test]
async fn bounded_scan_finds_the_same_hosts() {
    let interfaces = StaticInterfaces(workstation());
    let ranges = scanner::local_ranges(&interfaces);
    let responders: HashSet<Ipv4Addr> =
        [Ipv4Addr::new(192, 168, 0, 254)].into_iter().collect();

    let scanner = NetworkScanner::with_parts(
        Arc::new(Responders(responders)),
        Arc::new(LocalInterfaceResolver::new(interfaces)),
        Some(8),
    );
    let result = scanner.scan_network(&ranges).await;

    assert_eq!(result.len(), 1);
    assert!(result.get(&Ipv4Addr::new(192, 168, 0, 254)).is_some());
}

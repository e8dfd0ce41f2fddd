use std::net::{Ipv4Addr, Ipv6Addr};

use pnet::datalink::{MacAddr, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
use winhelper_common::network::interface::InterfaceProvider;

pub fn ni(name: &str, index: u32, mac: Option<MacAddr>, ips: &[IpNetwork], flags: u32) -> NetworkInterface {
    NetworkInterface {
        name: name.into(),
        description: "".into(),
        index,
        mac,
        ips: ips.to_vec(),
        flags,
    }
}

pub fn v4(a: u8, b: u8, c: u8, d: u8, p: u8) -> IpNetwork {
    IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(a, b, c, d), p).unwrap())
}

pub fn v6(s: &str, p: u8) -> IpNetwork {
    IpNetwork::V6(Ipv6Network::new(s.parse::<Ipv6Addr>().unwrap(), p).unwrap())
}

/// Interface list frozen at construction.
pub struct StaticInterfaces(pub Vec<NetworkInterface>);

impl InterfaceProvider for StaticInterfaces {
    fn interfaces(&self) -> Vec<NetworkInterface> {
        self.0.clone()
    }
}

/*************************************************************
                  Mock interfaces for testing
**************************************************************/

pub fn workstation() -> Vec<NetworkInterface> {
    vec![lo(), enp9s0(), wlan0(), eth1_down()]
}

pub fn lo() -> NetworkInterface {
    ni(
        "lo",
        1,
        Some(MacAddr::new(0, 0, 0, 0, 0, 0)),
        &[v4(127, 0, 0, 1, 8), v6("::1", 128)],
        65609,
    )
}

pub fn enp9s0() -> NetworkInterface {
    ni(
        "enp9s0",
        2,
        Some(MacAddr::new(0xa8, 0xa1, 0x59, 0x13, 0x41, 0x46)),
        &[
            v4(192, 168, 0, 32, 24),
            v6("fe80::b3dd:5c39:7c29:48b6", 64),
        ],
        69699,
    )
}

pub fn wlan0() -> NetworkInterface {
    ni(
        "wlan0",
        3,
        Some(MacAddr::new(0x34, 0xcf, 0xf6, 0x9a, 0x11, 0x22)),
        &[v4(10, 201, 127, 12, 16)],
        69699,
    )
}

pub fn eth1_down() -> NetworkInterface {
    ni(
        "eth1",
        4,
        Some(MacAddr::new(0x52, 0x54, 0x00, 0x12, 0x34, 0x56)),
        &[v4(172, 16, 5, 9, 24)],
        4098,
    )
}

use std::net::Ipv4Addr;

use colored::*;
use pnet::util::MacAddr;

use crate::terminal::colors;

pub fn host_details(ip: Ipv4Addr, mac: MacAddr) -> Vec<(String, ColoredString)> {
    vec![
        (String::from("IPv4"), ip.to_string().color(colors::IPV4_ADDR)),
        (String::from("MAC"), mac.to_string().to_uppercase().color(colors::MAC_ADDR)),
    ]
}

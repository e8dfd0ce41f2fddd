use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::NetworkError;

/// Prefix every local address is widened to before scanning.
pub const SCAN_PREFIX: u8 = 24;

/// An inclusive span of IPv4 addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    /// Every address from start to end, network and broadcast included.
    pub fn to_iter(&self) -> impl Iterator<Item = Ipv4Addr> + use<> {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        (start..=end).map(Ipv4Addr::from)
    }

    pub fn len(&self) -> usize {
        let start: u32 = self.start_addr.into();
        let end: u32 = self.end_addr.into();
        end.checked_sub(start).map_or(0, |span| span as usize + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Ipv4Network> for Ipv4Range {
    fn from(network: Ipv4Network) -> Self {
        Self::new(network.network(), network.broadcast())
    }
}

pub fn cidr_range(ip: Ipv4Addr, prefix: u8) -> Result<Ipv4Range, NetworkError> {
    let network = Ipv4Network::new(ip, prefix)
        .map_err(|e| NetworkError::MalformedAddress(format!("{ip}/{prefix}: {e}")))?;
    Ok(Ipv4Range::from(network))
}

/// Widens an address to its /24 block with the low byte cleared.
pub fn widen_to_scan_block(ip: Ipv4Addr) -> Ipv4Network {
    let [a, b, c, _] = ip.octets();
    Ipv4Network::new(Ipv4Addr::new(a, b, c, 0), SCAN_PREFIX)
        .expect("/24 is a valid IPv4 prefix")
}

/// Parses `a.b.c.d/nn`, or a bare address which is widened to its /24.
pub fn parse_network(input: &str) -> Result<Ipv4Network, NetworkError> {
    let trimmed = input.trim();
    if !trimmed.contains('/') {
        return trimmed
            .parse::<Ipv4Addr>()
            .map(widen_to_scan_block)
            .map_err(|_| NetworkError::MalformedAddress(input.to_string()));
    }

    let network: Ipv4Network = trimmed
        .parse()
        .map_err(|_| NetworkError::MalformedAddress(input.to_string()))?;

    Ipv4Network::new(network.network(), network.prefix())
        .map_err(|_| NetworkError::MalformedAddress(input.to_string()))
}

//! Wake-on-LAN magic packet sender.
//!
//! Delivery is best effort: a successful send only means the datagram left
//! this host, never that the target woke up.

use std::net::{Ipv4Addr, SocketAddrV4, UdpSocket};

use pnet::util::MacAddr;
use tracing::{error, info};
use winhelper_common::error::NetworkError;
use winhelper_common::network::mac;

/// Sends a magic packet for `mac_addr` to `broadcast:port`.
///
/// Returns `false` on malformed input or a socket error, which are logged.
pub fn wake_on_lan(mac_addr: &str, broadcast: &str, port: u16) -> bool {
    match send_magic_packet(mac_addr, broadcast, port) {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to send magic packet to {mac_addr}: {e}");
            false
        }
    }
}

/// Validates both addresses before opening any socket, then sends one datagram.
pub fn send_magic_packet(mac_addr: &str, broadcast: &str, port: u16) -> Result<(), NetworkError> {
    let target: MacAddr = mac::parse_mac(mac_addr)?;
    let broadcast: Ipv4Addr = broadcast
        .trim()
        .parse()
        .map_err(|_| NetworkError::MalformedAddress(broadcast.to_string()))?;

    send_to(target, SocketAddrV4::new(broadcast, port))
}

pub fn send_to(target: MacAddr, destination: SocketAddrV4) -> Result<(), NetworkError> {
    let packet = mac::magic_packet(target);

    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
    socket.set_broadcast(true)?;
    let sent: usize = socket.send_to(&packet, destination)?;

    if sent != packet.len() {
        return Err(NetworkError::Io(std::io::Error::other(format!(
            "short send: {sent} of {} bytes",
            packet.len()
        ))));
    }

    info!("Magic packet for {target} sent to {destination}");
    Ok(())
}

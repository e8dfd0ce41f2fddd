use std::net::{Ipv4Addr, SocketAddrV4, UdpSocket};
use std::time::Duration;

use pnet::datalink::MacAddr;
use winhelper_common::network::mac::MAGIC_PACKET_LEN;
use winhelper_core::wake;

#[test]
fn magic_packet_reaches_a_listener() {
    let socket = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    socket.set_read_timeout(Some(Duration::from_secs(2))).unwrap();
    let port = socket.local_addr().unwrap().port();

    let target = MacAddr::new(0x00, 0x11, 0x22, 0x33, 0x44, 0x55);
    wake::send_to(target, SocketAddrV4::new(Ipv4Addr::LOCALHOST, port)).unwrap();

    let mut buf = [0u8; 512];
    let (len, _) = socket.recv_from(&mut buf).unwrap();
    assert_eq!(len, MAGIC_PACKET_LEN);
    for chunk in buf[6..len].chunks(6) {
        assert_eq!(chunk, &[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
    }
}

#[test]
fn dash_separated_mac_is_accepted() {
    let socket = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    let port = socket.local_addr().unwrap().port();

    assert!(wake::wake_on_lan("1c-83-41-78-28-f5", "127.0.0.1", port));
}

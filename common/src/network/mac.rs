use pnet::util::MacAddr;

use crate::error::NetworkError;

pub const MAGIC_PACKET_LEN: usize = 102;
const SYNC_STREAM_LEN: usize = 6;
const MAC_REPETITIONS: usize = 16;

/// Parses a hardware address written with `:` or `-` separators, or none at all.
///
/// Anything that is not exactly twelve hex digits once separators are removed
/// is rejected.
pub fn parse_mac(input: &str) -> Result<MacAddr, NetworkError> {
    let digits: String = input.chars().filter(|c| *c != ':' && *c != '-').collect();

    if digits.len() != 12 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(NetworkError::MalformedAddress(input.to_string()));
    }

    let mut octets = [0u8; 6];
    for (idx, octet) in octets.iter_mut().enumerate() {
        *octet = u8::from_str_radix(&digits[idx * 2..idx * 2 + 2], 16)
            .map_err(|_| NetworkError::MalformedAddress(input.to_string()))?;
    }

    let [a, b, c, d, e, f] = octets;
    Ok(MacAddr::new(a, b, c, d, e, f))
}

/// Builds the Wake-on-LAN payload: six `0xFF` bytes followed by the MAC sixteen times.
pub fn magic_packet(mac: MacAddr) -> [u8; MAGIC_PACKET_LEN] {
    let MacAddr(a, b, c, d, e, f) = mac;
    let octets: [u8; 6] = [a, b, c, d, e, f];
    let mut packet = [0xFF; MAGIC_PACKET_LEN];

    for chunk in packet[SYNC_STREAM_LEN..].chunks_exact_mut(6).take(MAC_REPETITIONS) {
        chunk.copy_from_slice(&octets);
    }

    packet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mac_accepts_common_notations() {
        let expected = MacAddr::new(0x1C, 0x83, 0x41, 0x78, 0x28, 0xF5);
        assert_eq!(parse_mac("1C:83:41:78:28:F5").unwrap(), expected);
        assert_eq!(parse_mac("1c-83-41-78-28-f5").unwrap(), expected);
        assert_eq!(parse_mac("1C83417828F5").unwrap(), expected);
    }

    #[test]
    fn parse_mac_rejects_short_input() {
        let result = parse_mac("1C:83:41:78:28");
        assert!(matches!(result, Err(NetworkError::MalformedAddress(_))));
    }

    #[test]
    fn parse_mac_rejects_non_hex() {
        let result = parse_mac("1C:83:41:78:28:ZZ");
        assert!(matches!(result, Err(NetworkError::MalformedAddress(_))));
    }

    #[test]
    fn magic_packet_layout() {
        let mac = MacAddr::new(0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF);
        let packet = magic_packet(mac);

        assert_eq!(packet.len(), 102);
        assert!(packet[..6].iter().all(|b| *b == 0xFF));
        for rep in packet[6..].chunks(6) {
            assert_eq!(rep, &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
        }
    }
}

//! Reverse-DNS name construction for PTR lookups.

use crate::DomainError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Turns an IP literal into the name queried for its PTR record.
///
/// `1.2.3.4` becomes `4.3.2.1.in-addr.arpa`. IPv6 literals become the
/// nibble-reversed `ip6.arpa` name. Anything else is an
/// [`DomainError::InvalidIpAddress`].
pub fn to_reverse_name(ip: &str) -> Result<String, DomainError> {
    let addr: IpAddr = ip
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))?;

    Ok(match addr {
        IpAddr::V4(v4) => ipv4_reverse_name(&v4),
        IpAddr::V6(v6) => ipv6_reverse_name(&v6),
    })
}

fn ipv4_reverse_name(ip: &Ipv4Addr) -> String {
    let octets = ip.octets();
    format!(
        "{}.{}.{}.{}.in-addr.arpa",
        octets[3], octets[2], octets[1], octets[0]
    )
}

fn ipv6_reverse_name(ip: &Ipv6Addr) -> String {
    let mut nibbles = Vec::with_capacity(32);
    for byte in ip.octets().iter().rev() {
        nibbles.push(format!("{:x}", byte & 0x0f));
        nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
    }
    format!("{}.ip6.arpa", nibbles.join("."))
}

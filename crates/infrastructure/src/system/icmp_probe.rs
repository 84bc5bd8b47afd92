use async_trait::async_trait;
use ferrous_nslookup_application::ports::{EchoReply, NetworkProbe};
use ferrous_nslookup_domain::DomainError;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

const ICMP_ECHO_REQUEST: u8 = 8;
const ICMP_HEADER_LEN: usize = 8;
const ECHO_SEQUENCE: u16 = 1;

/// ICMPv4 echo over an unprivileged ping socket, or a raw socket when the
/// kernel does not allow ping sockets for this user.
pub struct IcmpProbe {
    identifier: u16,
}

impl IcmpProbe {
    pub fn new() -> Self {
        Self {
            identifier: (std::process::id() & 0xffff) as u16,
        }
    }

    fn open_socket() -> Result<UdpSocket, DomainError> {
        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::ICMPV4))
            .or_else(|_| Socket::new(Domain::IPV4, Type::RAW, Some(Protocol::ICMPV4)))
            .map_err(|e| DomainError::IoError(format!("Failed to open ICMP socket: {}", e)))?;

        socket
            .set_nonblocking(true)
            .map_err(|e| DomainError::IoError(format!("Failed to configure ICMP socket: {}", e)))?;

        UdpSocket::from_std(socket.into())
            .map_err(|e| DomainError::IoError(format!("Failed to register ICMP socket: {}", e)))
    }
}

impl Default for IcmpProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NetworkProbe for IcmpProbe {
    async fn echo(
        &self,
        target: IpAddr,
        payload: &[u8],
        timeout: Duration,
    ) -> Result<EchoReply, DomainError> {
        if !target.is_ipv4() {
            return Err(DomainError::InvalidIpAddress(format!(
                "ICMP probe supports IPv4 only: {}",
                target
            )));
        }

        let socket = Self::open_socket()?;
        let packet = build_echo_request(self.identifier, ECHO_SEQUENCE, payload);

        tokio::time::timeout(timeout, socket.send_to(&packet, SocketAddr::new(target, 0)))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| DomainError::IoError(format!("Failed to send echo request: {}", e)))?;

        debug!(target_ip = %target, identifier = self.identifier, "ICMP echo sent");

        let mut buf = [0u8; 1500];
        let (len, peer) = tokio::time::timeout(timeout, socket.recv_from(&mut buf))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| DomainError::IoError(format!("Failed to read echo reply: {}", e)))?;

        let icmp_type = reply_type(&buf[..len]).ok_or_else(|| {
            DomainError::IoError(format!("Short ICMP reply from {}: {} bytes", peer, len))
        })?;

        Ok(EchoReply {
            peer: peer.ip(),
            icmp_type,
        })
    }
}

/// Echo request with the checksum filled in.
pub fn build_echo_request(identifier: u16, sequence: u16, payload: &[u8]) -> Vec<u8> {
    let mut packet = Vec::with_capacity(ICMP_HEADER_LEN + payload.len());
    packet.push(ICMP_ECHO_REQUEST);
    packet.push(0);
    packet.extend_from_slice(&[0, 0]);
    packet.extend_from_slice(&identifier.to_be_bytes());
    packet.extend_from_slice(&sequence.to_be_bytes());
    packet.extend_from_slice(payload);

    let checksum = internet_checksum(&packet);
    packet[2..4].copy_from_slice(&checksum.to_be_bytes());
    packet
}

/// RFC 1071 ones' complement sum.
pub fn internet_checksum(data: &[u8]) -> u16 {
    let mut sum: u32 = data
        .chunks(2)
        .map(|chunk| match chunk {
            [hi, lo] => u32::from(u16::from_be_bytes([*hi, *lo])),
            [hi] => u32::from(u16::from_be_bytes([*hi, 0])),
            _ => 0,
        })
        .sum();

    while sum > 0xffff {
        sum = (sum & 0xffff) + (sum >> 16);
    }
    !(sum as u16)
}

/// ICMP type of a reply. Raw sockets deliver the IPv4 header as well.
fn reply_type(datagram: &[u8]) -> Option<u8> {
    let first = *datagram.first()?;
    let offset = if first >> 4 == 4 {
        usize::from(first & 0x0f) * 4
    } else {
        0
    };
    datagram.get(offset).copied()
}

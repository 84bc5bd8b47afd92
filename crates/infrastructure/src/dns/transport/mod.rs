pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use ferrous_nslookup_domain::{DomainError, TransportMode};
use std::net::SocketAddr;
use std::time::Duration;

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Vec<u8>,
    /// Which protocol was used
    pub protocol_used: &'static str,
}

/// Trait for sending raw DNS messages over the wire
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;
}

/// Enum-dispatched transport, one variant per [`TransportMode`].
pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }
}

pub fn create_transport(mode: TransportMode, server_addr: SocketAddr) -> Transport {
    match mode {
        TransportMode::Udp => Transport::Udp(udp::UdpTransport::new(server_addr)),
        TransportMode::Tcp => Transport::Tcp(tcp::TcpTransport::new(server_addr)),
    }
}

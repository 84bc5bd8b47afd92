use async_trait::async_trait;
use ferrous_nslookup_domain::DomainError;
use std::fmt;
use std::net::IpAddr;
use std::time::Duration;

/// Reply to an ICMP echo request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoReply {
    pub peer: IpAddr,
    /// ICMP message type of the reply; 0 is an echo reply.
    pub icmp_type: u8,
}

impl EchoReply {
    pub fn is_echo_reply(&self) -> bool {
        self.icmp_type == 0
    }
}

#[async_trait]
pub trait NetworkProbe: Send + Sync {
    async fn echo(
        &self,
        target: IpAddr,
        payload: &[u8],
        timeout: Duration,
    ) -> Result<EchoReply, DomainError>;
}

/// One address bound to a local network interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub interface: String,
    pub address: IpAddr,
    pub prefix_len: Option<u8>,
}

impl fmt::Display for InterfaceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix_len {
            Some(prefix) => write!(f, "{} {}/{}", self.interface, self.address, prefix),
            None => write!(f, "{} {}", self.interface, self.address),
        }
    }
}

pub trait InterfaceLister: Send + Sync {
    fn addresses(&self) -> Result<Vec<InterfaceAddress>, DomainError>;
}

use crate::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// Name server a lookup is sent to.
///
/// The host is kept as typed by the user: an IP literal or a hostname that
/// the transport resolves when it connects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameServer {
    host: Arc<str>,
    port: u16,
}

impl NameServer {
    pub fn new(host: impl Into<Arc<str>>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn ip(&self) -> Option<IpAddr> {
        self.host.parse().ok()
    }

    /// Socket address when the host is an IP literal.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.ip().map(|ip| SocketAddr::new(ip, self.port))
    }
}

fn parse_host_port(s: &str) -> Option<(&str, u16)> {
    if s.starts_with('[') {
        let end = s.find(']')?;
        let host = &s[1..end];
        let rest = &s[end + 1..];
        let port_str = rest.strip_prefix(':')?;
        let port = port_str.parse::<u16>().ok()?;
        Some((host, port))
    } else {
        let (host, port_str) = s.rsplit_once(':')?;
        let port = port_str.parse::<u16>().ok()?;
        Some((host, port))
    }
}

impl FromStr for NameServer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::InvalidServerAddress(
                "server address cannot be empty".to_string(),
            ));
        }

        // A bare IPv6 literal contains colons but no port
        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(Self::new(ip.to_string(), DEFAULT_DNS_PORT));
        }

        if s.starts_with('[') || s.contains(':') {
            let (host, port) = parse_host_port(s)
                .ok_or_else(|| DomainError::InvalidServerAddress(s.to_string()))?;
            if host.is_empty() || port == 0 {
                return Err(DomainError::InvalidServerAddress(s.to_string()));
            }
            return Ok(Self::new(host, port));
        }

        Ok(Self::new(s, DEFAULT_DNS_PORT))
    }
}

impl fmt::Display for NameServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

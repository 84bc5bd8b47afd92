use std::fmt;

/// How a query travels to the name server.
///
/// UDP is the default. TCP is only used for the single re-query that follows
/// a truncated UDP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransportMode {
    #[default]
    Udp,
    Tcp,
}

impl TransportMode {
    pub fn protocol_name(&self) -> &'static str {
        match self {
            TransportMode::Udp => "UDP",
            TransportMode::Tcp => "TCP",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.protocol_name())
    }
}

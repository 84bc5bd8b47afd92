use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::create_transport;
use async_trait::async_trait;
use ferrous_nslookup_application::ports::DnsExchanger;
use ferrous_nslookup_domain::{
    DnsQuery, DomainError, ExchangeResponse, NameServer, TransportMode,
};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, instrument};

/// [`DnsExchanger`] backed by hickory-proto messages over tokio sockets.
pub struct HickoryDnsExchanger {
    timeout: Duration,
}

impl HickoryDnsExchanger {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// IP literals are used as is; hostnames go through the system resolver.
    async fn resolve_server(&self, server: &NameServer) -> Result<SocketAddr, DomainError> {
        if let Some(addr) = server.socket_addr() {
            return Ok(addr);
        }

        let lookup = tokio::time::timeout(
            self.timeout,
            tokio::net::lookup_host((server.host(), server.port())),
        )
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: server.to_string(),
        })?
        .map_err(|e| {
            DomainError::InvalidServerAddress(format!("{}: {}", server.host(), e))
        })?;

        let addrs: Vec<SocketAddr> = lookup.collect();
        addrs
            .iter()
            .find(|addr| addr.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(|| {
                DomainError::InvalidServerAddress(format!("{}: no addresses", server.host()))
            })
    }
}

#[async_trait]
impl DnsExchanger for HickoryDnsExchanger {
    #[instrument(
        skip(self, question, mode),
        fields(domain = %question.domain, record_type = %question.record_type, mode = %mode)
    )]
    async fn exchange(
        &self,
        question: &DnsQuery,
        server: &NameServer,
        mode: TransportMode,
    ) -> Result<ExchangeResponse, DomainError> {
        let server_addr = self.resolve_server(server).await?;
        let (id, message_bytes) = MessageBuilder::build_query_with_id(question)?;

        let transport = create_transport(mode, server_addr);
        let raw = transport.send(&message_bytes, self.timeout).await?;

        let parsed = ResponseParser::parse(&raw.bytes)?;
        if parsed.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                parsed.id, id
            )));
        }

        debug!(
            server = %server_addr,
            protocol = raw.protocol_used,
            rcode = parsed.response.rcode,
            truncated = parsed.response.truncated,
            "Exchange complete"
        );

        Ok(parsed.response)
    }
}

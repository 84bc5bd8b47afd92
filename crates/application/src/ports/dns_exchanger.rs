use async_trait::async_trait;
use ferrous_nslookup_domain::{DnsQuery, DomainError, ExchangeResponse, NameServer, TransportMode};

/// Sends one question to a name server and decodes the reply.
///
/// Implementations never retry on their own: truncation is reported through
/// [`ExchangeResponse::truncated`] and handled by the query executor.
#[async_trait]
pub trait DnsExchanger: Send + Sync {
    async fn exchange(
        &self,
        question: &DnsQuery,
        server: &NameServer,
        mode: TransportMode,
    ) -> Result<ExchangeResponse, DomainError>;
}

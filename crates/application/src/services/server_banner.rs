use super::query_executor::QueryExecutor;
use crate::ports::DnsExchanger;
use ferrous_nslookup_domain::{
    DnsRecord, DomainError, NameServer, QueryTarget, SessionState,
};
use std::io::{self, Write};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

const UNKNOWN_SERVER_NAME: &str = "UnKnown";

/// Prints the `Server:` / `Address:` lines that precede every lookup.
pub struct ServerBanner {
    executor: QueryExecutor,
}

impl ServerBanner {
    pub fn new(exchanger: Arc<dyn DnsExchanger>) -> Self {
        Self {
            executor: QueryExecutor::new(exchanger),
        }
    }

    /// Name of the server, found with a recursive PTR query sent to the
    /// server itself. Hostnames are returned unchanged and any failure
    /// yields `UnKnown`.
    pub async fn server_name(&mut self, server: &NameServer) -> String {
        let Some(ip) = server.ip() else {
            return server.host().to_string();
        };

        match self.lookup_ptr(ip, server).await {
            Ok(Some(name)) => name,
            Ok(None) => UNKNOWN_SERVER_NAME.to_string(),
            Err(e) => {
                debug!(server = %server, error = %e, "Server name lookup failed");
                UNKNOWN_SERVER_NAME.to_string()
            }
        }
    }

    pub async fn render<W: Write>(&mut self, out: &mut W, server: &NameServer) -> io::Result<()> {
        let name = self.server_name(server).await;
        writeln!(out, "Server:   {}", name)?;
        writeln!(out, "Address:  {}", server.host())?;
        writeln!(out)
    }

    async fn lookup_ptr(
        &mut self,
        ip: IpAddr,
        server: &NameServer,
    ) -> Result<Option<String>, DomainError> {
        let target = QueryTarget::reverse(&ip.to_string())?;
        let session = SessionState::new(server.clone()).with_recursion(true);

        let (_, response) = self.executor.execute(&target, "PTR", &session).await?;

        Ok(response.answers.into_iter().find_map(|record| match record {
            DnsRecord::PTR(name) => Some(name),
            _ => None,
        }))
    }
}

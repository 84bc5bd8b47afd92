use crate::ports::DnsExchanger;
use ferrous_nslookup_domain::{
    to_reverse_name, DnsQuery, DomainError, ExchangeResponse, QueryTarget, RecordType,
    SessionState, TransportMode,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Switches a transport mode to TCP for as long as it lives.
///
/// The previous mode is put back on drop, whatever path the exchange took.
pub struct ReliableModeGuard<'a> {
    mode: &'a mut TransportMode,
    previous: TransportMode,
}

impl<'a> ReliableModeGuard<'a> {
    pub fn acquire(mode: &'a mut TransportMode) -> Self {
        let previous = *mode;
        *mode = TransportMode::Tcp;
        Self { mode, previous }
    }

    pub fn mode(&self) -> TransportMode {
        *self.mode
    }
}

impl Drop for ReliableModeGuard<'_> {
    fn drop(&mut self) {
        *self.mode = self.previous;
    }
}

/// Runs a single sub-query of a lookup.
pub struct QueryExecutor {
    exchanger: Arc<dyn DnsExchanger>,
    mode: TransportMode,
}

impl QueryExecutor {
    pub fn new(exchanger: Arc<dyn DnsExchanger>) -> Self {
        Self {
            exchanger,
            mode: TransportMode::default(),
        }
    }

    pub fn transport_mode(&self) -> TransportMode {
        self.mode
    }

    /// Resolves `type_token`, sends the question and returns it with the response.
    ///
    /// Unknown tokens query `A`. A `PTR` token queries the reverse name of the
    /// target. A truncated reply is asked again exactly once over TCP.
    #[instrument(skip(self, target, session), fields(lookup = %target.name))]
    pub async fn execute(
        &mut self,
        target: &QueryTarget,
        type_token: &str,
        session: &SessionState,
    ) -> Result<(DnsQuery, ExchangeResponse), DomainError> {
        let record_type = RecordType::from_token(type_token);

        let name: Arc<str> = if record_type == RecordType::PTR && !target.is_reverse {
            to_reverse_name(&target.name)?.into()
        } else {
            Arc::clone(&target.name)
        };

        let question =
            DnsQuery::new(name, record_type).with_recursion(session.recursion_desired);

        let response = self
            .exchanger
            .exchange(&question, &session.server, self.mode)
            .await?;

        if !response.truncated {
            return Ok((question, response));
        }

        debug!(
            domain = %question.domain,
            record_type = %record_type,
            server = %session.server,
            "Truncated response, retrying over TCP"
        );

        let guard = ReliableModeGuard::acquire(&mut self.mode);
        let response = self
            .exchanger
            .exchange(&question, &session.server, guard.mode())
            .await?;
        drop(guard);

        Ok((question, response))
    }
}

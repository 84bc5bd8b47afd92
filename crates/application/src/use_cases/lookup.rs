use crate::ports::DnsExchanger;
use crate::services::{AnswerRenderer, QueryExecutor, ResponseAggregator, ServerBanner};
use ferrous_nslookup_domain::{LogicalResponse, QueryTarget, SessionState, TransportMode};
use std::io::{self, Write};
use std::sync::Arc;
use tracing::debug;

/// One complete lookup: banner, every sub-query, rendered answer.
pub struct LookupUseCase {
    aggregator: ResponseAggregator,
    banner: ServerBanner,
    renderer: AnswerRenderer,
}

impl LookupUseCase {
    pub fn new(exchanger: Arc<dyn DnsExchanger>) -> Self {
        Self {
            aggregator: ResponseAggregator::new(QueryExecutor::new(Arc::clone(&exchanger))),
            banner: ServerBanner::new(exchanger),
            renderer: AnswerRenderer::new(),
        }
    }

    pub fn transport_mode(&self) -> TransportMode {
        self.aggregator.transport_mode()
    }

    pub async fn execute<W: Write>(
        &mut self,
        name: &str,
        session: &SessionState,
        out: &mut W,
    ) -> io::Result<LogicalResponse> {
        let target = QueryTarget::forward(name);

        self.banner.render(out, &session.server).await?;

        let response = self
            .aggregator
            .aggregate(&target, &session.type_expression, session)
            .await;

        debug!(
            target_name = %target.name,
            answers = response.answers.len(),
            authority = response.authority.len(),
            failures = response.failures.len(),
            "Lookup finished"
        );

        self.renderer.render(out, &response, &target)?;
        Ok(response)
    }
}

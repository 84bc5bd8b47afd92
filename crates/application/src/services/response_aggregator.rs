use super::query_executor::QueryExecutor;
use ferrous_nslookup_domain::{
    resolve_types, LogicalResponse, QueryTarget, SessionState, TransportMode,
};
use tracing::warn;

/// Runs every sub-query of a type expression and merges the results.
pub struct ResponseAggregator {
    executor: QueryExecutor,
}

impl ResponseAggregator {
    pub fn new(executor: QueryExecutor) -> Self {
        Self { executor }
    }

    pub fn transport_mode(&self) -> TransportMode {
        self.executor.transport_mode()
    }

    /// Sub-queries run in expression order. A failed sub-query is recorded
    /// and the remaining ones still run.
    pub async fn aggregate(
        &mut self,
        target: &QueryTarget,
        type_expression: &str,
        session: &SessionState,
    ) -> LogicalResponse {
        let mut response = LogicalResponse::new();

        for token in resolve_types(type_expression) {
            match self.executor.execute(target, &token, session).await {
                Ok((question, sub_response)) => response.merge(question, sub_response),
                Err(e) => {
                    warn!(
                        target_name = %target.name,
                        type_token = %token,
                        error = %e,
                        "Sub-query failed"
                    );
                    response.record_failure(e);
                }
            }
        }

        response
    }
}

use crate::{DnsQuery, DnsRecord, DomainError};

/// Response of one exchange with a name server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeResponse {
    pub answers: Vec<DnsRecord>,
    pub authority: Vec<DnsRecord>,
    pub truncated: bool,
    /// Textual RCODE as reported by the server (`NOERROR`, `NXDOMAIN`, ...).
    pub rcode: &'static str,
}

impl ExchangeResponse {
    pub fn new(answers: Vec<DnsRecord>, authority: Vec<DnsRecord>) -> Self {
        Self {
            answers,
            authority,
            truncated: false,
            rcode: "NOERROR",
        }
    }

    pub fn truncated(mut self) -> Self {
        self.truncated = true;
        self
    }

    pub fn with_rcode(mut self, rcode: &'static str) -> Self {
        self.rcode = rcode;
        self
    }
}

/// Merged result of every sub-query of one lookup.
#[derive(Debug, Clone, Default)]
pub struct LogicalResponse {
    pub answers: Vec<DnsRecord>,
    pub authority: Vec<DnsRecord>,
    /// Errors of the sub-queries that got no response, in execution order.
    pub failures: Vec<DomainError>,
    /// Question of the last sub-query that reached the wire.
    pub last_question: Option<DnsQuery>,
    pub successful_queries: usize,
}

impl LogicalResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sub-response, answers and authority alike.
    pub fn merge(&mut self, question: DnsQuery, response: ExchangeResponse) {
        self.answers.extend(response.answers);
        self.authority.extend(response.authority);
        self.last_question = Some(question);
        self.successful_queries += 1;
    }

    pub fn record_failure(&mut self, error: DomainError) {
        self.failures.push(error);
    }

    pub fn has_response(&self) -> bool {
        self.successful_queries > 0
    }

    /// Empty answer on an address question: the "Non-existent domain" case.
    pub fn is_non_existent(&self) -> bool {
        self.answers.is_empty()
            && self
                .last_question
                .as_ref()
                .is_some_and(|q| q.record_type.is_address())
    }
}

use async_trait::async_trait;
use ferrous_nslookup_application::ports::DnsExchanger;
use ferrous_nslookup_domain::{
    DnsQuery, DomainError, ExchangeResponse, NameServer, RecordType, TransportMode,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub question: DnsQuery,
    pub server: NameServer,
    pub mode: TransportMode,
}

type Scripted = Result<ExchangeResponse, DomainError>;

/// Answers from a script keyed by (name, type).
///
/// Each key holds a queue: entries are consumed in order and the last one
/// keeps answering. Unscripted questions get an empty NOERROR response.
#[derive(Default)]
pub struct MockDnsExchanger {
    script: Mutex<HashMap<(String, RecordType), VecDeque<Scripted>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockDnsExchanger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, name: &str, record_type: RecordType, response: ExchangeResponse) {
        self.push(name, record_type, Ok(response));
    }

    pub fn fail(&self, name: &str, record_type: RecordType, error: DomainError) {
        self.push(name, record_type, Err(error));
    }

    fn push(&self, name: &str, record_type: RecordType, entry: Scripted) {
        self.script
            .lock()
            .unwrap()
            .entry((name.to_string(), record_type))
            .or_default()
            .push_back(entry);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, record_type: RecordType) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.question.record_type == record_type)
            .collect()
    }
}

#[async_trait]
impl DnsExchanger for MockDnsExchanger {
    async fn exchange(
        &self,
        question: &DnsQuery,
        server: &NameServer,
        mode: TransportMode,
    ) -> Result<ExchangeResponse, DomainError> {
        self.calls.lock().unwrap().push(RecordedCall {
            question: question.clone(),
            server: server.clone(),
            mode,
        });

        let mut script = self.script.lock().unwrap();
        let key = (question.domain.to_string(), question.record_type);
        match script.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap(),
            None => Ok(ExchangeResponse::default()),
        }
    }
}

use ferrous_nslookup_application::ports::{DnsExchanger, InterfaceLister, NetworkProbe};
use ferrous_nslookup_application::use_cases::{
    BatchLookup, InteractiveSession, LookupUseCase, RunDiagnosticsUseCase,
};
use ferrous_nslookup_domain::{Config, NameServer, SessionState};
use ferrous_nslookup_infrastructure::dns::HickoryDnsExchanger;
use ferrous_nslookup_infrastructure::system::{IcmpProbe, SystemInterfaceLister};
use std::sync::Arc;
use tracing::debug;

/// Wires the infrastructure adapters into the use cases.
pub struct Services {
    exchanger: Arc<dyn DnsExchanger>,
    default_server: NameServer,
    session_defaults: SessionState,
    pub diagnostics: RunDiagnosticsUseCase,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let exchanger: Arc<dyn DnsExchanger> =
            Arc::new(HickoryDnsExchanger::new(config.lookup.timeout_ms));
        let probe: Arc<dyn NetworkProbe> = Arc::new(IcmpProbe::new());
        let interfaces: Arc<dyn InterfaceLister> = Arc::new(SystemInterfaceLister::new());

        let default_server = config.default_server()?;
        let session_defaults = SessionState::new(default_server.clone())
            .with_type_expression(config.lookup.query_type.clone())
            .with_recursion(config.lookup.recursion_desired);

        debug!(
            server = %default_server,
            timeout_ms = config.lookup.timeout_ms,
            "Services initialized"
        );

        Ok(Self {
            exchanger,
            default_server,
            session_defaults,
            diagnostics: RunDiagnosticsUseCase::new(probe, interfaces, config.diagnostics.clone()),
        })
    }

    pub fn interactive_session(&self) -> InteractiveSession {
        InteractiveSession::new(self.lookup(), self.session_defaults.clone())
    }

    pub fn batch_lookup(&self) -> BatchLookup {
        BatchLookup::new(self.lookup(), self.default_server.clone())
    }

    fn lookup(&self) -> LookupUseCase {
        LookupUseCase::new(Arc::clone(&self.exchanger))
    }
}

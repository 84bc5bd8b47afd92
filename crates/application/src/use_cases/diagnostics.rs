use crate::ports::{InterfaceLister, NetworkProbe};
use ferrous_nslookup_domain::config::DiagnosticsConfig;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Outcome of the start-up checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticsReport {
    pub reflected_from: Option<IpAddr>,
    pub interface_addresses: usize,
}

/// Pings the probe target once and logs every local interface address.
/// Nothing here is fatal: failures are logged and the report stays empty.
pub struct RunDiagnosticsUseCase {
    probe: Arc<dyn NetworkProbe>,
    interfaces: Arc<dyn InterfaceLister>,
    config: DiagnosticsConfig,
}

impl RunDiagnosticsUseCase {
    pub fn new(
        probe: Arc<dyn NetworkProbe>,
        interfaces: Arc<dyn InterfaceLister>,
        config: DiagnosticsConfig,
    ) -> Self {
        Self {
            probe,
            interfaces,
            config,
        }
    }

    pub async fn execute(&self) -> DiagnosticsReport {
        if !self.config.enabled {
            return DiagnosticsReport::default();
        }

        DiagnosticsReport {
            reflected_from: self.ping().await,
            interface_addresses: self.log_interfaces(),
        }
    }

    async fn ping(&self) -> Option<IpAddr> {
        let target: IpAddr = match self.config.probe_target.parse() {
            Ok(ip) => ip,
            Err(_) => {
                warn!(target_ip = %self.config.probe_target, "Probe target is not an IP address");
                return None;
            }
        };

        let timeout = Duration::from_millis(self.config.probe_timeout_ms);
        match self
            .probe
            .echo(target, self.config.probe_payload.as_bytes(), timeout)
            .await
        {
            Ok(reply) if reply.is_echo_reply() => {
                info!("got reflection from {}", reply.peer);
                Some(reply.peer)
            }
            Ok(reply) => {
                warn!(
                    peer = %reply.peer,
                    icmp_type = reply.icmp_type,
                    "Unexpected ICMP reply, wanted echo reply"
                );
                None
            }
            Err(e) => {
                warn!(target_ip = %target, error = %e, "ICMP probe failed");
                None
            }
        }
    }

    fn log_interfaces(&self) -> usize {
        match self.interfaces.addresses() {
            Ok(addresses) => {
                for address in &addresses {
                    info!("{}", address);
                }
                addresses.len()
            }
            Err(e) => {
                warn!(error = %e, "Could not list local addresses");
                0
            }
        }
    }
}

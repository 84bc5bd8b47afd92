use serde::{Deserialize, Serialize};

/// Start-up diagnostics: one ICMP echo and a dump of local addresses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiagnosticsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Address the echo request is sent to
    #[serde(default = "default_probe_target")]
    pub probe_target: String,

    #[serde(default = "default_probe_payload")]
    pub probe_payload: String,

    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            probe_target: default_probe_target(),
            probe_payload: default_probe_payload(),
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_probe_target() -> String {
    "8.8.8.8".to_string()
}

fn default_probe_payload() -> String {
    "HELLO-R-U-THERE".to_string()
}

fn default_probe_timeout_ms() -> u64 {
    2000
}

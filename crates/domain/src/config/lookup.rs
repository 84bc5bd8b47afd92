use serde::{Deserialize, Serialize};

use crate::name_server::DEFAULT_DNS_PORT;
use crate::type_expression::DEFAULT_TYPE_EXPRESSION;

/// Lookup defaults for batch runs and new interactive sessions
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Name server queried when none is given (IP or hostname)
    #[serde(default = "default_server")]
    pub server: String,

    /// Port used when the server has no explicit `:port`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Composite type expression, e.g. "A+AAAA" or "MX"
    #[serde(default = "default_query_type")]
    pub query_type: String,

    /// Set the RD bit on outgoing queries
    #[serde(default)]
    pub recursion_desired: bool,

    /// Per-exchange timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            port: default_port(),
            query_type: default_query_type(),
            recursion_desired: false,
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_server() -> String {
    "8.8.8.8".to_string()
}

fn default_port() -> u16 {
    DEFAULT_DNS_PORT
}

fn default_query_type() -> String {
    DEFAULT_TYPE_EXPRESSION.to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

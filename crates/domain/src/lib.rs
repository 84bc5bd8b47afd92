//! ferrous-nslookup domain layer
pub mod config;
pub mod dns_protocol;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod errors;
pub mod name_server;
pub mod reverse_name;
pub mod session;
pub mod type_expression;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_protocol::TransportMode;
pub use dns_query::{DnsQuery, QueryTarget};
pub use dns_record::{DnsRecord, RecordType, SoaData};
pub use dns_response::{ExchangeResponse, LogicalResponse};
pub use errors::DomainError;
pub use name_server::{NameServer, DEFAULT_DNS_PORT};
pub use reverse_name::to_reverse_name;
pub use session::SessionState;
pub use type_expression::{resolve_types, DEFAULT_TYPE_EXPRESSION};

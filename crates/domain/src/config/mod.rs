//! Configuration module for ferrous-nslookup
//!
//! - `root`: Main configuration and CLI overrides
//! - `lookup`: Default server, query type, recursion and timeout
//! - `diagnostics`: Start-up reachability probe and interface dump
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod diagnostics;
pub mod errors;
pub mod logging;
pub mod lookup;
pub mod root;

pub use diagnostics::DiagnosticsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use lookup::LookupConfig;
pub use root::{CliOverrides, Config};

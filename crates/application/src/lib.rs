//! ferrous-nslookup application layer
//!
//! Ports towards the network, the lookup services built on them, and the
//! interactive and batch use cases.
pub mod ports;
pub mod services;
pub mod use_cases;

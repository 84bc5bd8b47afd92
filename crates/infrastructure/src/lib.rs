//! ferrous-nslookup infrastructure layer
//!
//! hickory-proto wire handling, UDP/TCP transports and the system probes
//! behind the application ports.
pub mod dns;
pub mod system;

pub mod diagnostics;
pub mod dns_exchanger;

pub use diagnostics::{EchoReply, InterfaceAddress, InterfaceLister, NetworkProbe};
pub use dns_exchanger::DnsExchanger;

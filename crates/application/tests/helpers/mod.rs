#![allow(dead_code)]

pub mod mock_diagnostics;
pub mod mock_exchanger;

pub use mock_diagnostics::{MockInterfaceLister, MockNetworkProbe};
pub use mock_exchanger::{MockDnsExchanger, RecordedCall};

use ferrous_nslookup_domain::{DnsRecord, SessionState, SoaData};

pub fn session() -> SessionState {
    SessionState::new("8.8.8.8".parse().unwrap())
}

pub fn a(ip: &str) -> DnsRecord {
    DnsRecord::A(ip.parse().unwrap())
}

pub fn aaaa(ip: &str) -> DnsRecord {
    DnsRecord::AAAA(ip.parse().unwrap())
}

pub fn mx(preference: u16, exchange: &str) -> DnsRecord {
    DnsRecord::MX {
        preference,
        exchange: exchange.to_string(),
    }
}

pub fn soa(mname: &str, minimum: u32) -> DnsRecord {
    DnsRecord::SOA(SoaData {
        mname: mname.to_string(),
        rname: format!("hostmaster.{}", mname),
        serial: 1,
        refresh: 3600,
        retry: 900,
        expire: 604800,
        minimum,
    })
}

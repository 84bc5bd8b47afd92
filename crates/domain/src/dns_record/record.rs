use std::net::{Ipv4Addr, Ipv6Addr};

/// Start-of-authority fields, as carried in answer and authority sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    pub mname: String,
    pub rname: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

/// A decoded resource record.
///
/// One variant per record kind the answer renderer knows how to print.
/// Records are produced by the response parser and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsRecord {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(String),
    NS(String),
    MX {
        preference: u16,
        exchange: String,
    },
    PTR(String),
    TXT(Vec<String>),
    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
    DNSKEY {
        flags: u16,
        protocol: u8,
        algorithm: String,
        public_key: String,
    },
    SOA(SoaData),
    /// Any record type the renderer does not print (RRSIG, OPT, ...).
    Other { type_code: u16 },
}

impl DnsRecord {
    pub fn is_address(&self) -> bool {
        matches!(self, DnsRecord::A(_) | DnsRecord::AAAA(_))
    }
}

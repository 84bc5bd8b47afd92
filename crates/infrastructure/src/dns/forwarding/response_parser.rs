use super::record_type_map::RecordTypeMapper;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ferrous_nslookup_domain::{DnsRecord, DomainError, ExchangeResponse, SoaData};
use hickory_proto::dnssec::rdata::DNSSECRData;
use hickory_proto::dnssec::PublicKey;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

/// DNSKEY protocol field, fixed by RFC 4034.
const DNSKEY_PROTOCOL: u8 = 3;

/// A decoded response together with the header fields the exchanger checks.
#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,
    pub response: ExchangeResponse,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let answers: Vec<DnsRecord> = message.answers().iter().map(Self::convert).collect();
        let authority: Vec<DnsRecord> = message
            .name_servers()
            .iter()
            .map(Self::convert)
            .collect();

        let rcode = Self::rcode_to_status(message.response_code());
        let truncated = message.truncated();

        debug!(
            rcode = rcode,
            answers = answers.len(),
            authority = authority.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        let mut response = ExchangeResponse::new(answers, authority).with_rcode(rcode);
        response.truncated = truncated;

        Ok(ParsedResponse {
            id: message.id(),
            response,
        })
    }

    /// Maps a hickory record onto the renderer's record model.
    pub fn convert(record: &Record) -> DnsRecord {
        match record.data() {
            RData::A(a) => DnsRecord::A(a.0),
            RData::AAAA(aaaa) => DnsRecord::AAAA(aaaa.0),
            RData::CNAME(canonical) => DnsRecord::CNAME(canonical.to_utf8()),
            RData::NS(ns) => DnsRecord::NS(ns.to_utf8()),
            RData::PTR(ptr) => DnsRecord::PTR(ptr.to_utf8()),
            RData::MX(mx) => DnsRecord::MX {
                preference: mx.preference(),
                exchange: mx.exchange().to_utf8(),
            },
            RData::TXT(txt) => DnsRecord::TXT(
                txt.txt_data()
                    .iter()
                    .map(|data| String::from_utf8_lossy(data).into_owned())
                    .collect(),
            ),
            RData::SRV(srv) => DnsRecord::SRV {
                priority: srv.priority(),
                weight: srv.weight(),
                port: srv.port(),
                target: srv.target().to_utf8(),
            },
            RData::SOA(soa) => DnsRecord::SOA(SoaData {
                mname: soa.mname().to_utf8(),
                rname: soa.rname().to_utf8(),
                serial: soa.serial(),
                refresh: seconds(soa.refresh()),
                retry: seconds(soa.retry()),
                expire: seconds(soa.expire()),
                minimum: soa.minimum(),
            }),
            RData::DNSSEC(DNSSECRData::DNSKEY(dnskey)) => {
                let pk = dnskey.public_key();
                DnsRecord::DNSKEY {
                    flags: dnskey.flags(),
                    protocol: DNSKEY_PROTOCOL,
                    algorithm: pk.algorithm().to_string(),
                    public_key: BASE64.encode(pk.public_bytes()),
                }
            }
            _ => {
                let record_type = record.record_type();
                debug!(
                    record_type = %record_type,
                    known = RecordTypeMapper::from_hickory(record_type).is_some(),
                    "Record without a rendering"
                );
                DnsRecord::Other {
                    type_code: u16::from(record_type),
                }
            }
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

/// SOA timers are signed on the wire model; negative values clamp to zero.
fn seconds(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

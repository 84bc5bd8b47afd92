//! DNS responses for parser and transport tests, encoded with hickory.

use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, NULL, PTR, SOA, SRV, TXT};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};

const TTL: u32 = 300;

/// First code of the private-use record type range.
pub const PRIVATE_TYPE: u16 = 65280;

fn name(s: &str) -> Name {
    Name::from_ascii(s).unwrap()
}

fn record(owner: &str, rdata: RData) -> Record {
    Record::from_rdata(name(owner), TTL, rdata)
}

pub fn a(owner: &str, ip: Ipv4Addr) -> Record {
    record(owner, RData::A(A::from(ip)))
}

pub fn aaaa(owner: &str, ip: Ipv6Addr) -> Record {
    record(owner, RData::AAAA(AAAA::from(ip)))
}

pub fn cname(owner: &str, target: &str) -> Record {
    record(owner, RData::CNAME(CNAME(name(target))))
}

pub fn ns(owner: &str, target: &str) -> Record {
    record(owner, RData::NS(NS(name(target))))
}

pub fn ptr(owner: &str, target: &str) -> Record {
    record(owner, RData::PTR(PTR(name(target))))
}

pub fn mx(owner: &str, preference: u16, exchange: &str) -> Record {
    record(owner, RData::MX(MX::new(preference, name(exchange))))
}

pub fn txt(owner: &str, strings: &[&str]) -> Record {
    let strings = strings.iter().map(|s| s.to_string()).collect();
    record(owner, RData::TXT(TXT::new(strings)))
}

pub fn srv(owner: &str, priority: u16, weight: u16, port: u16, target: &str) -> Record {
    record(owner, RData::SRV(SRV::new(priority, weight, port, name(target))))
}

pub fn soa(owner: &str, mname: &str, rname: &str, serial: u32, minimum: u32) -> Record {
    let soa = SOA::new(name(mname), name(rname), serial, 7200, 3600, 1209600, minimum);
    record(owner, RData::SOA(soa))
}

pub fn private(owner: &str, rdata: Vec<u8>) -> Record {
    record(
        owner,
        RData::Unknown {
            code: RecordType::from(PRIVATE_TYPE),
            rdata: NULL::with(rdata),
        },
    )
}

/// An empty NOERROR response carrying `id`.
pub fn response(id: u16) -> Message {
    let mut message = Message::new(id, MessageType::Response, OpCode::Query);
    message.set_recursion_desired(true);
    message.set_recursion_available(true);
    message
}

/// A response echoing the id and question of `query`.
pub fn response_to(query: &Message) -> Message {
    let mut message = response(query.id());
    for q in query.queries() {
        message.add_query(q.clone());
    }
    message
}

pub fn with_question(mut message: Message, owner: &str, record_type: RecordType) -> Message {
    message.add_query(Query::query(name(owner), record_type));
    message
}

pub fn with_rcode(mut message: Message, rcode: ResponseCode) -> Message {
    message.set_response_code(rcode);
    message
}

pub fn encode(message: &Message) -> Vec<u8> {
    message.to_vec().unwrap()
}

/// Question name (without the root dot) and type of an encoded query.
pub fn decode_question(bytes: &[u8]) -> Option<(String, RecordType)> {
    let message = Message::from_vec(bytes).ok()?;
    let query = message.queries().first()?;
    let name = query.name().to_utf8();
    Some((name.trim_end_matches('.').to_string(), query.query_type()))
}

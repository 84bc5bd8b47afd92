//! DNS Message Builder
//!
//! Serializes a sub-query question into wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use ferrous_nslookup_domain::{DnsQuery, DomainError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query message with a random ID and serialize it.
    ///
    /// The RD flag is copied from the question. Returns the ID so the
    /// response can be matched against it.
    pub fn build_query_with_id(question: &DnsQuery) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let bytes = Self::build_query(id, question)?;
        Ok((id, bytes))
    }

    pub fn build_query(id: u16, question: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        let name = Name::from_str(&question.domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", question.domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(&question.record_type));
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(question.recursion_desired);
        message.add_query(query);

        Self::serialize_message(&message)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

use super::RecordType;
use crate::reverse_name::to_reverse_name;
use crate::DomainError;
use std::sync::Arc;

/// The name a lookup was asked about.
///
/// Built once per lookup and never changed afterwards. Reverse targets are
/// converted to their `in-addr.arpa` form at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTarget {
    pub name: Arc<str>,
    pub is_reverse: bool,
}

impl QueryTarget {
    pub fn forward(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            is_reverse: false,
        }
    }

    pub fn reverse(ip: &str) -> Result<Self, DomainError> {
        Ok(Self {
            name: to_reverse_name(ip)?.into(),
            is_reverse: true,
        })
    }
}

/// DNS question of a single sub-query.
/// Uses `Arc<str>` so the executor, aggregator and renderer share one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub recursion_desired: bool,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            recursion_desired: false,
        }
    }

    pub fn with_recursion(mut self, recursion_desired: bool) -> Self {
        self.recursion_desired = recursion_desired;
        self
    }
}

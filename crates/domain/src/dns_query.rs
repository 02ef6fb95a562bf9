use super::{DnsClass, RecordType};
use std::sync::Arc;

/// A single question as it arrived in the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub dns_class: DnsClass,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            dns_class: DnsClass::IN,
        }
    }

    pub fn with_class(mut self, dns_class: DnsClass) -> Self {
        self.dns_class = dns_class;
        self
    }
}

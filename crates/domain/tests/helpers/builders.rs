#![allow(dead_code)]
use decoy_dns_domain::{DnsClass, DnsQuery, RecordType};

pub struct DnsQueryBuilder {
    domain: String,
    record_type: RecordType,
    dns_class: DnsClass,
}

impl DnsQueryBuilder {
    pub fn new() -> Self {
        Self {
            domain: "example.com.".to_string(),
            record_type: RecordType::A,
            dns_class: DnsClass::IN,
        }
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn dns_class(mut self, dns_class: DnsClass) -> Self {
        self.dns_class = dns_class;
        self
    }

    pub fn build(self) -> DnsQuery {
        DnsQuery::new(self.domain, self.record_type).with_class(self.dns_class)
    }
}

impl Default for DnsQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#![allow(dead_code)]

use decoy_dns_application::services::ProviderChain;
use decoy_dns_application::use_cases::HandleAnswerUseCase;
use decoy_dns_domain::config::{ExactAnswer, PatternAnswer, SafeBoxConfig};
use decoy_dns_infrastructure::answers::{ExactAnswerContainer, PatternContainer, SafeBoxProvider};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use std::sync::Arc;

/// Serialized single-question query with recursion desired.
pub fn build_query(id: u16, name: &str, record_type: RecordType) -> Vec<u8> {
    build_query_with_class(id, name, record_type, DNSClass::IN)
}

pub fn build_query_with_class(
    id: u16,
    name: &str,
    record_type: RecordType,
    dns_class: DNSClass,
) -> Vec<u8> {
    let mut query = Query::new();
    query.set_name(Name::from_str(name).unwrap());
    query.set_query_type(record_type);
    query.set_query_class(dns_class);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

/// Provider chain over real containers, configured inline.
pub struct ChainBuilder {
    exact: Vec<ExactAnswer>,
    patterns: Vec<PatternAnswer>,
    safe_box: SafeBoxConfig,
    reverse_ptr: bool,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self {
            exact: vec![],
            patterns: vec![],
            safe_box: SafeBoxConfig::default(),
            reverse_ptr: true,
        }
    }

    pub fn exact(mut self, name: &str, record_type: &str, answer: &str) -> Self {
        self.exact.push(ExactAnswer {
            name: name.to_string(),
            record_type: record_type.to_string(),
            answer: answer.to_string(),
        });
        self
    }

    pub fn pattern(mut self, pattern: &str, record_type: &str, answer: &str) -> Self {
        self.patterns.push(PatternAnswer {
            pattern: pattern.to_string(),
            record_type: record_type.to_string(),
            answer: answer.to_string(),
        });
        self
    }

    pub fn safe_box(mut self, enabled: bool) -> Self {
        self.safe_box.enabled = enabled;
        self
    }

    pub fn build(self) -> ProviderChain {
        ProviderChain::new(
            Arc::new(ExactAnswerContainer::new(&self.exact, self.reverse_ptr).unwrap()),
            Arc::new(PatternContainer::new(&self.patterns).unwrap()),
            Arc::new(SafeBoxProvider::new(&self.safe_box).unwrap()),
        )
    }

    pub fn build_use_case(self) -> Arc<HandleAnswerUseCase> {
        Arc::new(HandleAnswerUseCase::new(Arc::new(self.build())))
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

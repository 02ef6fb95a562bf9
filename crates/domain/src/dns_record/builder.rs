use super::{DnsClass, RecordData, RecordType, ResponseRecord};
use crate::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

pub const DEFAULT_TTL: u32 = 300;
const DEFAULT_MX_PREFERENCE: u16 = 10;
const MAX_TXT_CHUNK: usize = 255;
const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

/// Builds a [`ResponseRecord`] from a question's fields and an answer text.
///
/// ```
/// use decoy_dns_domain::{RecordBuilder, RecordType};
///
/// let record = RecordBuilder::new()
///     .name("foo.test.")
///     .record_type(RecordType::ANY)
///     .data_type(RecordType::A)
///     .answer("10.0.0.1")
///     .build()
///     .unwrap();
/// assert_eq!(record.record_type, RecordType::ANY);
/// ```
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    dns_class: DnsClass,
    name: Option<Arc<str>>,
    record_type: Option<RecordType>,
    data_type: Option<RecordType>,
    answer: Option<Arc<str>>,
    ttl: u32,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            dns_class: DnsClass::IN,
            name: None,
            record_type: None,
            data_type: None,
            answer: None,
            ttl: DEFAULT_TTL,
        }
    }

    pub fn dns_class(mut self, dns_class: DnsClass) -> Self {
        self.dns_class = dns_class;
        self
    }

    pub fn name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Type declared on the record.
    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = Some(record_type);
        self
    }

    /// Type the answer text is parsed as. Defaults to the declared type.
    pub fn data_type(mut self, data_type: RecordType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    pub fn answer(mut self, answer: impl Into<Arc<str>>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> Result<ResponseRecord, DomainError> {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| DomainError::InvalidDomainName("record name is empty".to_string()))?;

        let data_type = self
            .data_type
            .or(self.record_type)
            .ok_or_else(|| DomainError::ConfigError("record type not set".to_string()))?;
        let record_type = self.record_type.unwrap_or(data_type);

        let answer = self
            .answer
            .ok_or_else(|| invalid(data_type, "", "answer not set"))?;

        let data = parse_answer(data_type, &answer)?;

        Ok(ResponseRecord {
            name,
            dns_class: self.dns_class,
            record_type,
            answer,
            data,
            ttl: self.ttl,
        })
    }
}

/// Parses `answer` as a literal of `data_type`.
pub fn parse_answer(data_type: RecordType, answer: &str) -> Result<RecordData, DomainError> {
    let text = answer.trim();
    match data_type {
        RecordType::A => text
            .parse::<Ipv4Addr>()
            .map(RecordData::A)
            .map_err(|e| invalid(data_type, answer, &e.to_string())),
        RecordType::AAAA => text
            .parse::<Ipv6Addr>()
            .map(RecordData::AAAA)
            .map_err(|e| invalid(data_type, answer, &e.to_string())),
        RecordType::CNAME => parse_target(data_type, answer).map(RecordData::CNAME),
        RecordType::PTR => parse_target(data_type, answer).map(RecordData::PTR),
        RecordType::NS => parse_target(data_type, answer).map(RecordData::NS),
        RecordType::MX => parse_mx(answer),
        RecordType::TXT => Ok(RecordData::TXT(split_txt(answer))),
        RecordType::SOA | RecordType::SRV | RecordType::ANY => {
            Err(DomainError::UnsupportedRecordType(data_type))
        }
    }
}

/// Appends the root label when missing. Empty input stays empty.
pub fn to_fqdn(name: &str) -> String {
    if name.is_empty() || name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

fn parse_target(data_type: RecordType, answer: &str) -> Result<String, DomainError> {
    let fqdn = to_fqdn(answer.trim());
    validate_name(&fqdn).map_err(|reason| invalid(data_type, answer, reason))?;
    Ok(fqdn)
}

fn parse_mx(answer: &str) -> Result<RecordData, DomainError> {
    let mut parts = answer.split_whitespace();
    let (preference, exchange) = match (parts.next(), parts.next(), parts.next()) {
        (Some(exchange), None, _) => (DEFAULT_MX_PREFERENCE, exchange),
        (Some(preference), Some(exchange), None) => {
            let preference = preference
                .parse::<u16>()
                .map_err(|e| invalid(RecordType::MX, answer, &e.to_string()))?;
            (preference, exchange)
        }
        _ => {
            return Err(invalid(
                RecordType::MX,
                answer,
                "expected '<preference> <exchange>'",
            ))
        }
    };

    Ok(RecordData::MX {
        preference,
        exchange: parse_target(RecordType::MX, exchange)?,
    })
}

fn split_txt(answer: &str) -> Vec<String> {
    if answer.len() <= MAX_TXT_CHUNK {
        return vec![answer.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    for ch in answer.chars() {
        if current.len() + ch.len_utf8() > MAX_TXT_CHUNK {
            chunks.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn validate_name(fqdn: &str) -> Result<(), &'static str> {
    if fqdn == "." {
        return Ok(());
    }
    let body = fqdn.trim_end_matches('.');
    if body.is_empty() {
        return Err("empty name");
    }
    if body.len() > MAX_NAME_LEN {
        return Err("name exceeds 253 characters");
    }
    for label in body.split('.') {
        if label.is_empty() {
            return Err("empty label");
        }
        if label.len() > MAX_LABEL_LEN {
            return Err("label exceeds 63 characters");
        }
        if label.chars().any(|c| c.is_whitespace()) {
            return Err("label contains whitespace");
        }
    }
    Ok(())
}

fn invalid(record_type: RecordType, answer: &str, reason: &str) -> DomainError {
    DomainError::InvalidAnswer {
        record_type,
        answer: answer.to_string(),
        reason: reason.to_string(),
    }
}

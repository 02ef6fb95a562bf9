use super::{DnsClass, RecordType};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Typed payload parsed from a canned answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(String),
    PTR(String),
    NS(String),
    MX { preference: u16, exchange: String },
    TXT(Vec<String>),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::AAAA(_) => RecordType::AAAA,
            RecordData::CNAME(_) => RecordType::CNAME,
            RecordData::PTR(_) => RecordType::PTR,
            RecordData::NS(_) => RecordType::NS,
            RecordData::MX { .. } => RecordType::MX,
            RecordData::TXT(_) => RecordType::TXT,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(ip) => write!(f, "{}", ip),
            RecordData::AAAA(ip) => write!(f, "{}", ip),
            RecordData::CNAME(name) | RecordData::PTR(name) | RecordData::NS(name) => {
                write!(f, "{}", name)
            }
            RecordData::MX {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            RecordData::TXT(parts) => {
                let quoted: Vec<String> = parts.iter().map(|p| format!("\"{}\"", p)).collect();
                write!(f, "{}", quoted.join(" "))
            }
        }
    }
}

/// Answer-section record built from a question and a provider's answer.
///
/// `record_type` is the type declared on the wire, which is the type of the
/// question as asked; `data` carries the payload for the type the answer was
/// looked up under. The two differ for ANY questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRecord {
    pub name: Arc<str>,
    pub dns_class: DnsClass,
    pub record_type: RecordType,
    pub answer: Arc<str>,
    pub data: RecordData,
    pub ttl: u32,
}

impl ResponseRecord {
    pub fn data_type(&self) -> RecordType {
        self.data.record_type()
    }
}

impl fmt::Display for ResponseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name, self.ttl, self.dns_class, self.record_type, self.data
        )
    }
}

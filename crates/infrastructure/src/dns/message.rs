use super::record_type_map::{DnsClassMapper, RecordTypeMapper};
use decoy_dns_application::ports::{QueryMessage, ResponseMessage};
use decoy_dns_domain::{DnsQuery, DomainError, RecordData, ResponseRecord};
use hickory_proto::op::Message;
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, NULL, PTR, TXT};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use std::str::FromStr;
use tracing::debug;

/// Request side of a `hickory_proto` message.
pub struct WireQuery<'a> {
    message: &'a Message,
}

impl<'a> WireQuery<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self { message }
    }
}

impl QueryMessage for WireQuery<'_> {
    fn question_count(&self) -> usize {
        self.message.queries().len()
    }

    fn question(&self) -> Option<DnsQuery> {
        let query = self.message.queries().first()?;

        let Some(record_type) = RecordTypeMapper::from_hickory(query.query_type()) else {
            debug!(record_type = ?query.query_type(), "Unsupported question type");
            return None;
        };
        let Some(dns_class) = DnsClassMapper::from_hickory(query.query_class()) else {
            debug!(class = ?query.query_class(), "Unsupported question class");
            return None;
        };

        Some(DnsQuery::new(query.name().to_ascii(), record_type).with_class(dns_class))
    }
}

/// Answer section of a `hickory_proto` response message.
pub struct WireResponse<'a> {
    message: &'a mut Message,
}

impl<'a> WireResponse<'a> {
    pub fn new(message: &'a mut Message) -> Self {
        Self { message }
    }
}

impl ResponseMessage for WireResponse<'_> {
    fn add_answer(&mut self, record: ResponseRecord) -> Result<(), DomainError> {
        let record = to_hickory_record(&record)?;
        self.message.add_answer(record);
        Ok(())
    }

    fn answer_count(&self) -> usize {
        self.message.answers().len()
    }
}

/// Converts a domain record into a wire record.
///
/// When the declared type differs from the payload type (an ANY question
/// answered from A data) the payload is carried as opaque rdata under the
/// declared type.
pub fn to_hickory_record(record: &ResponseRecord) -> Result<Record, DomainError> {
    let name = parse_name(&record.name)?;
    let mut rdata = to_rdata(&record.data)?;

    if record.record_type != record.data_type() {
        let bytes = rdata
            .to_bytes()
            .map_err(|e| DomainError::InvalidMessage(format!("Failed to encode rdata: {}", e)))?;
        rdata = RData::Unknown {
            code: RecordTypeMapper::to_hickory(record.record_type),
            rdata: NULL::with(bytes),
        };
    }

    let mut hickory_record = Record::from_rdata(name, record.ttl, rdata);
    hickory_record.set_dns_class(DnsClassMapper::to_hickory(record.dns_class));
    Ok(hickory_record)
}

fn to_rdata(data: &RecordData) -> Result<RData, DomainError> {
    let rdata = match data {
        RecordData::A(ip) => RData::A(A(*ip)),
        RecordData::AAAA(ip) => RData::AAAA(AAAA(*ip)),
        RecordData::CNAME(target) => RData::CNAME(CNAME(parse_name(target)?)),
        RecordData::PTR(target) => RData::PTR(PTR(parse_name(target)?)),
        RecordData::NS(target) => RData::NS(NS(parse_name(target)?)),
        RecordData::MX {
            preference,
            exchange,
        } => RData::MX(MX::new(*preference, parse_name(exchange)?)),
        RecordData::TXT(parts) => RData::TXT(TXT::new(parts.clone())),
    };
    Ok(rdata)
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_str(name)
        .map_err(|e| DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e)))
}

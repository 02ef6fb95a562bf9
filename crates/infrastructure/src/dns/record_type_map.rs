//! Mapping between the domain record types/classes and their `hickory_proto`
//! counterparts.

use decoy_dns_domain::{DnsClass, RecordType};
use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};

/// Bidirectional mapper between domain and hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building records)
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::ANY => HickoryRecordType::ANY,
        }
    }

    /// Convert hickory RecordType → domain RecordType (for incoming queries)
    ///
    /// Returns `None` for types no provider can answer.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::NS => Some(RecordType::NS),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            HickoryRecordType::SOA => Some(RecordType::SOA),
            HickoryRecordType::PTR => Some(RecordType::PTR),
            HickoryRecordType::MX => Some(RecordType::MX),
            HickoryRecordType::TXT => Some(RecordType::TXT),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            HickoryRecordType::SRV => Some(RecordType::SRV),
            HickoryRecordType::ANY => Some(RecordType::ANY),
            _ => None,
        }
    }
}

pub struct DnsClassMapper;

impl DnsClassMapper {
    pub fn to_hickory(dns_class: DnsClass) -> DNSClass {
        match dns_class {
            DnsClass::IN => DNSClass::IN,
            DnsClass::CH => DNSClass::CH,
            DnsClass::HS => DNSClass::HS,
            DnsClass::NONE => DNSClass::NONE,
            DnsClass::ANY => DNSClass::ANY,
        }
    }

    pub fn from_hickory(dns_class: DNSClass) -> Option<DnsClass> {
        match dns_class {
            DNSClass::IN => Some(DnsClass::IN),
            DNSClass::CH => Some(DnsClass::CH),
            DNSClass::HS => Some(DnsClass::HS),
            DNSClass::NONE => Some(DnsClass::NONE),
            DNSClass::ANY => Some(DnsClass::ANY),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_domain_type_maps_back() {
        let types = [
            RecordType::A,
            RecordType::NS,
            RecordType::CNAME,
            RecordType::SOA,
            RecordType::PTR,
            RecordType::MX,
            RecordType::TXT,
            RecordType::AAAA,
            RecordType::SRV,
            RecordType::ANY,
        ];

        for rt in types {
            let hickory = RecordTypeMapper::to_hickory(rt);
            assert_eq!(RecordTypeMapper::from_hickory(hickory), Some(rt));
            assert_eq!(u16::from(hickory), rt.to_u16());
        }
    }

    #[test]
    fn test_unsupported_type_returns_none() {
        assert!(RecordTypeMapper::from_hickory(HickoryRecordType::HTTPS).is_none());
    }

    #[test]
    fn test_class_mapping() {
        assert_eq!(DnsClassMapper::to_hickory(DnsClass::CH), DNSClass::CH);
        assert_eq!(DnsClassMapper::from_hickory(DNSClass::IN), Some(DnsClass::IN));
        assert_eq!(DnsClassMapper::from_hickory(DNSClass::OPT(1232)), None);
    }
}

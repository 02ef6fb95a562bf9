use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    SOA,
    PTR,
    MX,
    TXT,
    AAAA,
    SRV,
    ANY,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::SOA => "SOA",
            RecordType::PTR => "PTR",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::AAAA => "AAAA",
            RecordType::SRV => "SRV",
            RecordType::ANY => "ANY",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
            RecordType::ANY => 255,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            6 => Some(RecordType::SOA),
            12 => Some(RecordType::PTR),
            15 => Some(RecordType::MX),
            16 => Some(RecordType::TXT),
            28 => Some(RecordType::AAAA),
            33 => Some(RecordType::SRV),
            255 => Some(RecordType::ANY),
            _ => None,
        }
    }

    /// Whether a canned answer text can be turned into record data of this type.
    pub fn is_answerable(&self) -> bool {
        matches!(
            self,
            RecordType::A
                | RecordType::AAAA
                | RecordType::CNAME
                | RecordType::PTR
                | RecordType::NS
                | RecordType::MX
                | RecordType::TXT
        )
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "NS" => Ok(RecordType::NS),
            "CNAME" => Ok(RecordType::CNAME),
            "SOA" => Ok(RecordType::SOA),
            "PTR" => Ok(RecordType::PTR),
            "MX" => Ok(RecordType::MX),
            "TXT" => Ok(RecordType::TXT),
            "AAAA" => Ok(RecordType::AAAA),
            "SRV" => Ok(RecordType::SRV),
            "ANY" | "*" => Ok(RecordType::ANY),
            _ => Err(format!("Unknown record type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u16_codes_match_iana() {
        assert_eq!(RecordType::A.to_u16(), 1);
        assert_eq!(RecordType::PTR.to_u16(), 12);
        assert_eq!(RecordType::AAAA.to_u16(), 28);
        assert_eq!(RecordType::ANY.to_u16(), 255);
        assert_eq!(RecordType::from_u16(255), Some(RecordType::ANY));
        assert_eq!(RecordType::from_u16(65), None);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("ptr".parse::<RecordType>(), Ok(RecordType::PTR));
        assert_eq!("Any".parse::<RecordType>(), Ok(RecordType::ANY));
        assert!("HTTPS".parse::<RecordType>().is_err());
    }

    #[test]
    fn test_answerable_types() {
        assert!(RecordType::A.is_answerable());
        assert!(RecordType::TXT.is_answerable());
        assert!(!RecordType::ANY.is_answerable());
        assert!(!RecordType::SOA.is_answerable());
        assert!(!RecordType::SRV.is_answerable());
    }
}

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DnsClass {
    #[default]
    IN,
    CH,
    HS,
    NONE,
    ANY,
}

impl DnsClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DnsClass::IN => "IN",
            DnsClass::CH => "CH",
            DnsClass::HS => "HS",
            DnsClass::NONE => "NONE",
            DnsClass::ANY => "ANY",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            DnsClass::IN => 1,
            DnsClass::CH => 3,
            DnsClass::HS => 4,
            DnsClass::NONE => 254,
            DnsClass::ANY => 255,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(DnsClass::IN),
            3 => Some(DnsClass::CH),
            4 => Some(DnsClass::HS),
            254 => Some(DnsClass::NONE),
            255 => Some(DnsClass::ANY),
            _ => None,
        }
    }
}

impl fmt::Display for DnsClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DnsClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" => Ok(DnsClass::IN),
            "CH" => Ok(DnsClass::CH),
            "HS" => Ok(DnsClass::HS),
            "NONE" => Ok(DnsClass::NONE),
            "ANY" => Ok(DnsClass::ANY),
            _ => Err(format!("Unknown DNS class: {}", s)),
        }
    }
}

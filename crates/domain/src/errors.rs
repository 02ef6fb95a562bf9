use crate::RecordType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid {record_type} answer '{answer}': {reason}")]
    InvalidAnswer {
        record_type: RecordType,
        answer: String,
        reason: String,
    },

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(RecordType),

    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Answer provider '{provider}' failed: {reason}")]
    ProviderFault {
        provider: &'static str,
        reason: String,
    },

    #[error("Invalid DNS message: {0}")]
    InvalidMessage(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

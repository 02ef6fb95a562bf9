mod answer_provider;
mod dns_message;

pub use answer_provider::AnswerProvider;
pub use dns_message::{QueryMessage, ResponseMessage, SimpleMessage};

// Re-export for convenience
pub use decoy_dns_domain::{DnsQuery, ResponseRecord};

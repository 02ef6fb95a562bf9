use decoy_dns_domain::{DomainError, RecordType};
use std::sync::Arc;

/// A source of canned answers.
///
/// `Ok(None)` means the provider has nothing for this key. An `Err` is a
/// provider fault; the chain logs it and moves on to the next provider.
/// Implementations whose data can change after startup synchronize
/// internally.
pub trait AnswerProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn lookup(&self, key: &str, record_type: RecordType)
        -> Result<Option<Arc<str>>, DomainError>;
}

use crate::ports::AnswerProvider;
use decoy_dns_domain::RecordType;
use std::sync::Arc;
use tracing::warn;

/// Answer providers in fixed priority order: exact, pattern, synthetic.
///
/// The most specific source wins without any scoring: the first provider
/// that returns an answer decides. A provider that faults counts as one
/// that had no answer.
pub struct ProviderChain {
    providers: Vec<Arc<dyn AnswerProvider>>,
}

impl ProviderChain {
    pub fn new(
        exact: Arc<dyn AnswerProvider>,
        pattern: Arc<dyn AnswerProvider>,
        synthetic: Arc<dyn AnswerProvider>,
    ) -> Self {
        Self {
            providers: vec![exact, pattern, synthetic],
        }
    }

    /// Chain over `providers` in the order given.
    pub fn from_providers(providers: Vec<Arc<dyn AnswerProvider>>) -> Self {
        Self { providers }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// First answer in priority order.
    pub fn lookup(&self, key: &str, record_type: RecordType) -> Option<Arc<str>> {
        self.answers(key, record_type).next()
    }

    /// Every provider's answer in priority order, consulting each provider
    /// only when the previous answer is rejected by the caller.
    pub fn answers<'a>(
        &'a self,
        key: &'a str,
        record_type: RecordType,
    ) -> impl Iterator<Item = Arc<str>> + 'a {
        self.providers
            .iter()
            .filter_map(move |provider| match provider.lookup(key, record_type) {
                Ok(answer) => answer,
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        key = %key,
                        record_type = %record_type,
                        error = %e,
                        "Answer provider failed, trying next"
                    );
                    None
                }
            })
    }
}

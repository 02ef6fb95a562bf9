use crate::ports::{QueryMessage, ResponseMessage};
use crate::services::{ProviderChain, QueryNormalizer};
use decoy_dns_domain::dns_record::builder::DEFAULT_TTL;
use decoy_dns_domain::{DnsQuery, RecordBuilder, ResponseRecord};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Answers a request's question from the provider chain.
///
/// At most one record is added per call. The record carries the
/// question's own name, class and type, even when the lookup itself used a
/// normalized key or type.
pub struct HandleAnswerUseCase {
    chain: Arc<ProviderChain>,
    ttl: u32,
    answer_flag: Option<Arc<AtomicBool>>,
}

impl HandleAnswerUseCase {
    pub fn new(chain: Arc<ProviderChain>) -> Self {
        Self {
            chain,
            ttl: DEFAULT_TTL,
            answer_flag: None,
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Flag set to `true` whenever a call adds a record. It is never reset
    /// here; the owner decides when to clear it.
    pub fn with_answer_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.answer_flag = Some(flag);
        self
    }

    /// Adds the answer for `request`'s question to `response`.
    ///
    /// Returns `false` when no usable answer exists; `response` is then left
    /// as it was and the caller applies its own fallback.
    pub fn handle<Q, R>(&self, request: &Q, response: &mut R) -> bool
    where
        Q: QueryMessage + ?Sized,
        R: ResponseMessage + ?Sized,
    {
        let Some(question) = request.question() else {
            debug!("Request carries no question");
            return false;
        };
        if request.question_count() > 1 {
            debug!(
                questions = request.question_count(),
                "Only the first question is answered"
            );
        }

        for record in self.candidates(&question) {
            match response.add_answer(record) {
                Ok(()) => {
                    if let Some(flag) = &self.answer_flag {
                        flag.store(true, Ordering::Relaxed);
                    }
                    return true;
                }
                Err(e) => {
                    warn!(domain = %question.domain, error = %e, "Failed to add answer record");
                }
            }
        }

        debug!(domain = %question.domain, record_type = %question.record_type, "No answer");
        false
    }

    /// The record `handle` would add for `query`.
    pub fn resolve(&self, query: &DnsQuery) -> Option<ResponseRecord> {
        self.candidates(query).next()
    }

    fn candidates<'a>(&'a self, query: &'a DnsQuery) -> impl Iterator<Item = ResponseRecord> + 'a {
        let normalized = QueryNormalizer::normalize(&query.domain, query.record_type);

        debug!(
            record_type = %normalized.effective_type,
            class = %query.dns_class,
            key = %normalized.lookup_key,
            "query"
        );

        self.chain
            .answers(normalized.lookup_key, normalized.effective_type)
            .filter_map(move |answer| {
                let built = RecordBuilder::new()
                    .dns_class(query.dns_class)
                    .name(Arc::clone(&query.domain))
                    .record_type(query.record_type)
                    .data_type(normalized.effective_type)
                    .answer(Arc::clone(&answer))
                    .ttl(self.ttl)
                    .build();

                match built {
                    Ok(record) => {
                        debug!(
                            record_type = %record.record_type,
                            class = %record.dns_class,
                            answer = %answer,
                            "answer"
                        );
                        Some(record)
                    }
                    Err(e) => {
                        warn!(
                            domain = %query.domain,
                            answer = %answer,
                            error = %e,
                            "Discarding answer that does not fit the record type"
                        );
                        None
                    }
                }
            })
    }
}

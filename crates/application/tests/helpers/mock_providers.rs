#![allow(dead_code)]

use decoy_dns_application::ports::{AnswerProvider, QueryMessage, ResponseMessage};
use decoy_dns_domain::{DnsQuery, DomainError, RecordType, ResponseRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Provider answering from a fixed map and counting its lookups.
pub struct MockAnswerProvider {
    name: &'static str,
    answers: RwLock<HashMap<(String, RecordType), String>>,
    lookups: AtomicUsize,
}

impl MockAnswerProvider {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            answers: RwLock::new(HashMap::new()),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn with_answer(self, key: &str, record_type: RecordType, answer: &str) -> Self {
        self.answers
            .write()
            .unwrap()
            .insert((key.to_string(), record_type), answer.to_string());
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl AnswerProvider for MockAnswerProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn lookup(
        &self,
        key: &str,
        record_type: RecordType,
    ) -> Result<Option<Arc<str>>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .answers
            .read()
            .unwrap()
            .get(&(key.to_string(), record_type))
            .map(|a| Arc::from(a.as_str())))
    }
}

/// Provider whose every lookup faults.
pub struct FailingProvider {
    lookups: AtomicUsize,
}

impl FailingProvider {
    pub fn new() -> Self {
        Self {
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl AnswerProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn lookup(
        &self,
        _key: &str,
        _record_type: RecordType,
    ) -> Result<Option<Arc<str>>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::ProviderFault {
            provider: "failing",
            reason: "backing store unavailable".to_string(),
        })
    }
}

/// Message that carries one question and refuses every answer.
pub struct FailingMessage {
    pub question: DnsQuery,
    pub attempts: usize,
}

impl QueryMessage for FailingMessage {
    fn question_count(&self) -> usize {
        1
    }

    fn question(&self) -> Option<DnsQuery> {
        Some(self.question.clone())
    }
}

impl ResponseMessage for FailingMessage {
    fn add_answer(&mut self, _record: ResponseRecord) -> Result<(), DomainError> {
        self.attempts += 1;
        Err(DomainError::InvalidMessage("answer section is full".to_string()))
    }

    fn answer_count(&self) -> usize {
        0
    }
}

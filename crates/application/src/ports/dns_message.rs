use decoy_dns_domain::{DnsQuery, DomainError, ResponseRecord};

/// Read side of an incoming request.
pub trait QueryMessage {
    fn question_count(&self) -> usize;

    /// The first question, if the message carries any.
    fn question(&self) -> Option<DnsQuery>;
}

/// Write side of the outgoing response.
pub trait ResponseMessage {
    /// Appends to the answer section. On error the message is left untouched.
    fn add_answer(&mut self, record: ResponseRecord) -> Result<(), DomainError>;

    fn answer_count(&self) -> usize;
}

/// Protocol-free message for callers that do not speak the wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleMessage {
    pub id: u16,
    pub questions: Vec<DnsQuery>,
    pub answers: Vec<ResponseRecord>,
}

impl SimpleMessage {
    pub fn query(id: u16, question: DnsQuery) -> Self {
        Self {
            id,
            questions: vec![question],
            answers: vec![],
        }
    }

    pub fn response_to(request: &SimpleMessage) -> Self {
        Self {
            id: request.id,
            questions: request.questions.clone(),
            answers: vec![],
        }
    }
}

impl QueryMessage for SimpleMessage {
    fn question_count(&self) -> usize {
        self.questions.len()
    }

    fn question(&self) -> Option<DnsQuery> {
        self.questions.first().cloned()
    }
}

impl ResponseMessage for SimpleMessage {
    fn add_answer(&mut self, record: ResponseRecord) -> Result<(), DomainError> {
        self.answers.push(record);
        Ok(())
    }

    fn answer_count(&self) -> usize {
        self.answers.len()
    }
}

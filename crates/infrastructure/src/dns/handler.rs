use super::message::{WireQuery, WireResponse};
use decoy_dns_application::use_cases::HandleAnswerUseCase;
use decoy_dns_domain::DomainError;
use hickory_proto::op::{Message, MessageType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::sync::Arc;
use tracing::debug;

/// Answers decoded requests with canned records.
///
/// `None` means no provider had a usable answer and the caller should fall
/// back to its own handling (forwarding upstream, NXDOMAIN, ...).
pub struct AnswerHandler {
    use_case: Arc<HandleAnswerUseCase>,
}

impl AnswerHandler {
    pub fn new(use_case: Arc<HandleAnswerUseCase>) -> Self {
        Self { use_case }
    }

    pub fn answer(&self, request: &Message) -> Option<Message> {
        let mut response = Self::response_for(request);

        let answered = self
            .use_case
            .handle(&WireQuery::new(request), &mut WireResponse::new(&mut response));

        if answered {
            Some(response)
        } else {
            debug!(id = request.id(), "No canned answer for request");
            None
        }
    }

    /// Decodes `request_bytes`, answers it and encodes the response.
    pub fn answer_wire(&self, request_bytes: &[u8]) -> Result<Option<Vec<u8>>, DomainError> {
        let request = Message::from_vec(request_bytes)
            .map_err(|e| DomainError::InvalidMessage(format!("Failed to parse request: {}", e)))?;

        match self.answer(&request) {
            Some(response) => serialize_message(&response).map(Some),
            None => Ok(None),
        }
    }

    fn response_for(request: &Message) -> Message {
        let mut response = Message::new(request.id(), MessageType::Response, request.op_code());
        response.set_recursion_desired(request.recursion_desired());
        response.set_recursion_available(true);
        response.set_authoritative(true);
        for query in request.queries() {
            response.add_query(query.clone());
        }
        response
    }
}

fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    message.emit(&mut encoder).map_err(|e| {
        DomainError::InvalidMessage(format!("Failed to serialize DNS message: {}", e))
    })?;

    Ok(buf)
}

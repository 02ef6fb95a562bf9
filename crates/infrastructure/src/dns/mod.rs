pub mod handler;
pub mod message;
pub mod record_type_map;

pub use handler::AnswerHandler;
pub use message::{to_hickory_record, WireQuery, WireResponse};
pub use record_type_map::{DnsClassMapper, RecordTypeMapper};

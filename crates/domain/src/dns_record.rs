pub mod builder;
pub mod dns_class;
pub mod record;
pub mod record_type;

pub use builder::RecordBuilder;
pub use dns_class::DnsClass;
pub use record::{RecordData, ResponseRecord};
pub use record_type::RecordType;

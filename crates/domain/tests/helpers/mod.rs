mod builders;

pub use builders::DnsQueryBuilder;

pub mod provider_chain;
pub mod query_normalizer;

pub use provider_chain::ProviderChain;
pub use query_normalizer::{NormalizedQuery, QueryNormalizer};

//! Decoy DNS Application Layer
//!
//! Query normalization, the fixed-priority provider chain and the use case
//! that turns a request's question into at most one answer record.
pub mod ports;
pub mod services;
pub mod use_cases;

//! Decoy DNS Infrastructure Layer
//!
//! Answer providers backed by configuration and the adapters between
//! `hickory-proto` messages and the application ports.
pub mod answers;
pub mod dns;

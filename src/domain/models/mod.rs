//! Domain models for the subscription manager.

pub mod client;
pub mod plan;

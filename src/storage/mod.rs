//! Storage layer: backend-agnostic traits plus the concrete backends.

pub mod json;
pub mod memory;
pub mod traits;

pub use traits::{ClientStorage, Connection, PlanStorage};

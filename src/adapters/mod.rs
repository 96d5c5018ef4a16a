//! Concrete port implementations.

pub mod json_history;

//! Core engine types and logic.

pub mod ohlcv;
pub mod history;
pub mod indicator;
pub mod assembler;
pub mod error;

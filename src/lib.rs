//! candlekit — OHLCV indicator computation engine for candlestick dashboards.
//!
//! Hexagonal architecture: pure engine logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`]. The engine turns a
//! raw date-keyed price history into index-addressed bars and derived
//! indicator series (SMA, EMA, Bollinger Bands, RSI); fetching the history
//! and rendering the series are external collaborators.

pub mod domain;
pub mod ports;
pub mod adapters;

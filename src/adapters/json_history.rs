//! JSON history adapter.
//!
//! Parses the quote API's JSON payload into a [`RawHistory`]. The API does
//! not signal an unknown symbol through HTTP status; it returns a JSON
//! object with a top-level `"Message"` key instead, which this adapter
//! surfaces as [`EngineError::NoData`].

use crate::domain::error::EngineError;
use crate::domain::history::RawHistory;
use crate::ports::history_port::HistorySource;
use std::collections::HashMap;

/// Parses one history payload for `symbol`.
pub fn parse_history_payload(symbol: &str, json: &str) -> Result<RawHistory, EngineError> {
    let probe: serde_json::Value = serde_json::from_str(json)?;
    if let Some(message) = probe.get("Message").and_then(|m| m.as_str()) {
        return Err(EngineError::NoData {
            symbol: symbol.to_string(),
            message: message.to_string(),
        });
    }

    // Parse the document again rather than going through `Value`: the
    // history keys define bar order, and Value's map re-sorts them.
    Ok(serde_json::from_str(json)?)
}

/// A [`HistorySource`] over pre-fetched payloads, keyed by symbol. Stands
/// in for the network fetch in tests and offline use.
#[derive(Debug, Default)]
pub struct JsonHistorySource {
    payloads: HashMap<String, String>,
}

impl JsonHistorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(mut self, symbol: &str, json: &str) -> Self {
        self.payloads.insert(symbol.to_string(), json.to_string());
        self
    }
}

impl HistorySource for JsonHistorySource {
    fn fetch_history(&self, symbol: &str) -> Result<RawHistory, EngineError> {
        let json = self.payloads.get(symbol).ok_or_else(|| EngineError::NoData {
            symbol: symbol.to_string(),
            message: "no payload for symbol".to_string(),
        })?;
        parse_history_payload(symbol, json)
    }
}

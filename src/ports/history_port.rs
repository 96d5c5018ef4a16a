//! History source port.

use crate::domain::error::EngineError;
use crate::domain::history::RawHistory;

/// Where raw price histories come from. The production implementation is a
/// network fetch against the quote API; tests plug in canned payloads.
/// Retry, backoff and timeout policy all belong behind this seam, not in
/// the engine.
pub trait HistorySource {
    fn fetch_history(&self, symbol: &str) -> Result<RawHistory, EngineError>;
}

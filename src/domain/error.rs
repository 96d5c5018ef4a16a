//! Engine error types.

/// Top-level error type for candlekit.
///
/// Degenerate-but-valid inputs (fewer bars than an indicator's window) are
/// deliberately NOT represented here: they produce empty output series.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("unparseable {field} value {value:?} for {date}")]
    Parse {
        date: String,
        field: &'static str,
        value: String,
    },

    #[error("invalid window length {window} for {indicator}")]
    InvalidParameter {
        indicator: &'static str,
        window: usize,
    },

    #[error("no history found for {symbol:?}: {message}")]
    NoData { symbol: String, message: String },

    #[error("malformed history payload: {0}")]
    Payload(#[from] serde_json::Error),
}

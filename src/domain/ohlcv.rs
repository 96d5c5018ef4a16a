//! OHLCV bar representation.

/// One OHLCV record at a discrete time step.
///
/// `index` is the bar's position in chronological order within one request's
/// history. It is not a calendar date; mapping indices back to dates belongs
/// to the renderer (see [`RawHistory::date_axis`]).
///
/// [`RawHistory::date_axis`]: crate::domain::history::RawHistory::date_axis
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub index: usize,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// (close + low + high) / 3
    pub fn typical_price(&self) -> f64 {
        (self.close + self.low + self.high) / 3.0
    }
}

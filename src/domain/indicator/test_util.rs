//! Bar constructors shared by the indicator unit tests.

use crate::domain::ohlcv::Bar;

/// Flat bars where open = high = low = close.
pub fn make_bars(closes: &[f64]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(index, &close)| Bar {
            index,
            open: close,
            high: close,
            low: close,
            close,
            volume: 1000.0,
        })
        .collect()
}

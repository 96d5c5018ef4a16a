//! RSI (Relative Strength Index) indicator.
//!
//! Gains and losses are averaged with a plain arithmetic mean over the
//! trailing n close-to-close changes — not Wilder's smoothing. Changing
//! this would silently shift every output value, so it stays.
//!
//! Formula: RSI = 100 - 100 / (1 + avg_gain / avg_loss), with the division
//! left to IEEE-754: avg_loss == 0 with gains present gives +inf and an
//! RSI of exactly 100.
//!
//! Warm-up consumes one extra bar compared to the moving averages: the
//! first change needs a predecessor, so the first output sits at bar
//! position n, not n-1.

use crate::domain::error::EngineError;
use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use crate::domain::ohlcv::Bar;

pub fn rsi(bars: &[Bar], window: usize) -> Result<IndicatorSeries, EngineError> {
    if window == 0 {
        return Err(EngineError::InvalidParameter {
            indicator: "RSI",
            window,
        });
    }

    let mut points = Vec::with_capacity(bars.len().saturating_sub(window));
    if bars.len() <= window {
        return Ok(IndicatorSeries {
            kind: IndicatorKind::Rsi(window),
            points,
        });
    }

    // Change at bar j lands at slot j-1.
    let mut gains = Vec::with_capacity(bars.len() - 1);
    let mut losses = Vec::with_capacity(bars.len() - 1);
    for pair in bars.windows(2) {
        let change = pair[1].close - pair[0].close;
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    for i in window..bars.len() {
        let avg_gain = gains[i - window..i].iter().sum::<f64>() / window as f64;
        let avg_loss = losses[i - window..i].iter().sum::<f64>() / window as f64;
        points.push(IndicatorPoint {
            index: bars[i].index,
            value: 100.0 - 100.0 / (1.0 + avg_gain / avg_loss),
        });
    }

    Ok(IndicatorSeries {
        kind: IndicatorKind::Rsi(window),
        points,
    })
}

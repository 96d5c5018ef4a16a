//! Simple Moving Average indicator.
//!
//! Unweighted mean of the trailing n closing prices, computed with a
//! running sum. Warm-up: the first (n-1) bars produce no output.

use crate::domain::error::EngineError;
use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use crate::domain::ohlcv::Bar;

pub fn sma(bars: &[Bar], window: usize) -> Result<IndicatorSeries, EngineError> {
    if window == 0 {
        return Err(EngineError::InvalidParameter {
            indicator: "SMA",
            window,
        });
    }

    let mut points = Vec::with_capacity((bars.len() + 1).saturating_sub(window));
    let mut sum = 0.0;

    for (i, bar) in bars.iter().enumerate() {
        sum += bar.close;
        if i >= window {
            sum -= bars[i - window].close;
        }
        if i + 1 >= window {
            points.push(IndicatorPoint {
                index: bar.index,
                value: sum / window as f64,
            });
        }
    }

    Ok(IndicatorSeries {
        kind: IndicatorKind::Sma(window),
        points,
    })
}

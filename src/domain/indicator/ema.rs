//! Exponential Moving Average indicator.
//!
//! k = 2/(n+1), seeded with the SMA of the first n closes, then
//! EMA[i] = C[i]*k + EMA[i-1]*(1-k). The seed itself is the first emitted
//! point, so the output is index-aligned with SMA of the same window.

use crate::domain::error::EngineError;
use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use crate::domain::ohlcv::Bar;

pub fn ema(bars: &[Bar], window: usize) -> Result<IndicatorSeries, EngineError> {
    if window == 0 {
        return Err(EngineError::InvalidParameter {
            indicator: "EMA",
            window,
        });
    }

    let mut points = Vec::with_capacity((bars.len() + 1).saturating_sub(window));
    let k = 2.0 / (window as f64 + 1.0);
    let mut ema = 0.0;
    let mut sum = 0.0;

    for (i, bar) in bars.iter().enumerate() {
        if i + 1 < window {
            sum += bar.close;
        } else if i + 1 == window {
            sum += bar.close;
            ema = sum / window as f64;
            points.push(IndicatorPoint {
                index: bar.index,
                value: ema,
            });
        } else {
            ema = bar.close * k + ema * (1.0 - k);
            points.push(IndicatorPoint {
                index: bar.index,
                value: ema,
            });
        }
    }

    Ok(IndicatorSeries {
        kind: IndicatorKind::Ema(window),
        points,
    })
}

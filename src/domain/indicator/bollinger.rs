//! Bollinger Bands indicator.
//!
//! Bands are placed two standard deviations around a midline:
//! - Midline: SMA of closing prices over n bars (not emitted, only used
//!   to anchor the bands).
//! - Deviation: population standard deviation (divides by N, not N-1) of
//!   the typical price `(close + low + high) / 3` over the same n bars.
//!
//! The multiplier is fixed at 2 and the midline deliberately uses the
//! close-price SMA rather than the mean of typical prices, so the bands
//! line up with the SMA series drawn on the same chart.

use crate::domain::error::EngineError;
use crate::domain::indicator::{BandPoint, BandSeries, IndicatorKind};
use crate::domain::ohlcv::Bar;

pub fn bollinger(bars: &[Bar], window: usize) -> Result<BandSeries, EngineError> {
    if window == 0 {
        return Err(EngineError::InvalidParameter {
            indicator: "BOLLINGER",
            window,
        });
    }

    let mut points = Vec::with_capacity((bars.len() + 1).saturating_sub(window));

    for i in window - 1..bars.len() {
        let frame = &bars[i + 1 - window..=i];

        let mid = frame.iter().map(|b| b.close).sum::<f64>() / window as f64;

        let mean_typical =
            frame.iter().map(Bar::typical_price).sum::<f64>() / window as f64;
        let variance = frame
            .iter()
            .map(|b| {
                let diff = b.typical_price() - mean_typical;
                diff * diff
            })
            .sum::<f64>()
            / window as f64;
        let stddev = variance.sqrt();

        points.push(BandPoint {
            index: bars[i].index,
            high: mid + 2.0 * stddev,
            low: mid - 2.0 * stddev,
        });
    }

    Ok(BandSeries {
        kind: IndicatorKind::Bollinger(window),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::sma::sma;
    use crate::domain::indicator::test_util::make_bars;
    use approx::assert_relative_eq;

    #[test]
    fn bollinger_constant_prices_collapse() {
        let bars = make_bars(&[100.0, 100.0, 100.0, 100.0, 100.0]);
        let series = bollinger(&bars, 3).unwrap();

        assert_eq!(series.points.len(), 3);
        for point in &series.points {
            assert_relative_eq!(point.high, 100.0, epsilon = 1e-9);
            assert_relative_eq!(point.low, 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn bollinger_width_is_four_stddevs() {
        let bars = make_bars(&[10.0, 20.0, 30.0, 25.0, 15.0]);
        let series = bollinger(&bars, 3).unwrap();

        for point in &series.points {
            let frame = &bars[point.index + 1 - 3..=point.index];
            let mean: f64 = frame.iter().map(Bar::typical_price).sum::<f64>() / 3.0;
            let variance: f64 = frame
                .iter()
                .map(|b| (b.typical_price() - mean).powi(2))
                .sum::<f64>()
                / 3.0;
            assert_relative_eq!(
                point.high - point.low,
                4.0 * variance.sqrt(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn bollinger_midline_uses_close_sma_not_typical_mean() {
        // high sits 9 above the close and low on it, so every typical
        // price is close + 3. The band center must still be the close SMA.
        let bars: Vec<Bar> = [10.0, 20.0, 30.0, 40.0]
            .iter()
            .enumerate()
            .map(|(index, &close)| Bar {
                index,
                open: close,
                high: close + 9.0,
                low: close,
                close,
                volume: 1000.0,
            })
            .collect();
        let series = bollinger(&bars, 3).unwrap();
        let sma_series = sma(&bars, 3).unwrap();

        for (band, mid) in series.points.iter().zip(&sma_series.points) {
            assert_eq!(band.index, mid.index);
            let center = (band.high + band.low) / 2.0;
            assert_relative_eq!(center, mid.value, epsilon = 1e-9);
            // The mean of typical prices is 3 higher; make sure the
            // midline is not that.
            assert!((center - (mid.value + 3.0)).abs() > 1.0);
        }
    }

    #[test]
    fn bollinger_known_calculation() {
        let bars = make_bars(&[10.0, 20.0, 30.0]);
        let series = bollinger(&bars, 3).unwrap();

        let mid: f64 = (10.0 + 20.0 + 30.0) / 3.0;
        let variance: f64 = ((10.0 - mid).powi(2)
            + (20.0 - mid).powi(2)
            + (30.0 - mid).powi(2))
            / 3.0;
        let stddev = variance.sqrt();

        assert_eq!(series.points.len(), 1);
        assert_eq!(series.points[0].index, 2);
        assert_relative_eq!(series.points[0].high, mid + 2.0 * stddev, epsilon = 1e-9);
        assert_relative_eq!(series.points[0].low, mid - 2.0 * stddev, epsilon = 1e-9);
    }

    #[test]
    fn bollinger_insufficient_bars() {
        let bars = make_bars(&[10.0, 20.0]);
        assert!(bollinger(&bars, 5).unwrap().points.is_empty());
    }

    #[test]
    fn bollinger_empty_bars() {
        assert!(bollinger(&[], 3).unwrap().points.is_empty());
    }

    #[test]
    fn bollinger_window_0_is_invalid() {
        let bars = make_bars(&[10.0, 20.0]);
        assert!(matches!(
            bollinger(&bars, 0),
            Err(EngineError::InvalidParameter {
                indicator: "BOLLINGER",
                window: 0
            })
        ));
    }
}

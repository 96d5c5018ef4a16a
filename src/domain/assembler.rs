//! Series assembler: one history in, a bundle of render-ready series out.

use crate::domain::error::EngineError;
use crate::domain::indicator::bollinger::bollinger;
use crate::domain::indicator::ema::ema;
use crate::domain::indicator::rsi::rsi;
use crate::domain::indicator::sma::sma;
use crate::domain::indicator::{BandSeries, IndicatorPoint, IndicatorSeries};
use crate::domain::ohlcv::Bar;

/// Which indicators to compute, and with what window. `None` disables an
/// indicator; the OHLC pass-through and the volume steps are always
/// produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    pub sma: Option<usize>,
    pub ema: Option<usize>,
    pub bollinger: Option<usize>,
    pub rsi: Option<usize>,
}

impl Default for ChartConfig {
    /// Moving averages and bands on, RSI panel off, 13-bar windows.
    fn default() -> Self {
        Self {
            sma: Some(13),
            ema: Some(13),
            bollinger: Some(13),
            rsi: None,
        }
    }
}

/// Everything a renderer needs to draw one symbol's dashboard. Each series
/// is freshly allocated and owns its data; consuming them concurrently is
/// safe.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBundle {
    pub ohlc: Vec<Bar>,
    pub sma: Option<IndicatorSeries>,
    pub ema: Option<IndicatorSeries>,
    pub bollinger: Option<BandSeries>,
    pub volume: Vec<IndicatorPoint>,
    pub rsi: Option<IndicatorSeries>,
}

/// Runs every enabled indicator over one immutable bar sequence.
///
/// The first failing indicator's error propagates as-is; nothing is caught
/// or masked here.
pub fn compute_all(bars: &[Bar], config: &ChartConfig) -> Result<ChartBundle, EngineError> {
    Ok(ChartBundle {
        ohlc: bars.to_vec(),
        sma: config.sma.map(|w| sma(bars, w)).transpose()?,
        ema: config.ema.map(|w| ema(bars, w)).transpose()?,
        bollinger: config.bollinger.map(|w| bollinger(bars, w)).transpose()?,
        volume: volume_steps(bars),
        rsi: config.rsi.map(|w| rsi(bars, w)).transpose()?,
    })
}

/// Doubles volume samples into a stepped sequence so consecutive bars
/// render as flat-topped histogram columns: each transition repeats the
/// previous bar's volume at the next index before stepping to the new one.
pub fn volume_steps(bars: &[Bar]) -> Vec<IndicatorPoint> {
    let mut points = Vec::with_capacity(bars.len().saturating_mul(2).saturating_sub(1));
    for (i, bar) in bars.iter().enumerate() {
        if i > 0 {
            points.push(IndicatorPoint {
                index: bar.index,
                value: bars[i - 1].volume,
            });
        }
        points.push(IndicatorPoint {
            index: bar.index,
            value: bar.volume,
        });
    }
    points
}

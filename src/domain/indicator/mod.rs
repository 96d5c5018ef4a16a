//! Technical indicator implementations.
//!
//! Every indicator is a pure function over an immutable bar slice: it
//! borrows the bars, allocates a fresh output series, and shares no state
//! with any other computation. Series contain only emitted points — the
//! warm-up prefix an indicator cannot produce values for is simply absent,
//! so an output is always `bars.len() - warmup` points long (or empty when
//! there is not enough data, which is a normal state, not an error).

pub mod sma;
pub mod ema;
pub mod bollinger;
pub mod rsi;

#[cfg(test)]
pub(crate) mod test_util;

use std::fmt;

/// One output sample tied to the bar index it summarizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorPoint {
    pub index: usize,
    pub value: f64,
}

/// One Bollinger output sample: upper and lower band at a bar index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPoint {
    pub index: usize,
    pub high: f64,
    pub low: f64,
}

/// Indicator identity plus window parameter, used by renderers as a
/// series label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    Sma(usize),
    Ema(usize),
    Bollinger(usize),
    Rsi(usize),
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorKind::Sma(window) => write!(f, "SMA({})", window),
            IndicatorKind::Ema(window) => write!(f, "EMA({})", window),
            IndicatorKind::Bollinger(window) => write!(f, "BOLLINGER({})", window),
            IndicatorKind::Rsi(window) => write!(f, "RSI({})", window),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries {
    pub kind: IndicatorKind,
    pub points: Vec<IndicatorPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BandSeries {
    pub kind: IndicatorKind,
    pub points: Vec<BandPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_kind_display() {
        assert_eq!(IndicatorKind::Sma(13).to_string(), "SMA(13)");
        assert_eq!(IndicatorKind::Ema(13).to_string(), "EMA(13)");
        assert_eq!(IndicatorKind::Bollinger(20).to_string(), "BOLLINGER(20)");
        assert_eq!(IndicatorKind::Rsi(14).to_string(), "RSI(14)");
    }

    #[test]
    fn indicator_kind_hash_eq() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(IndicatorKind::Sma(13), "sma13");
        map.insert(IndicatorKind::Rsi(14), "rsi14");

        assert_eq!(map.get(&IndicatorKind::Sma(13)), Some(&"sma13"));
        assert_eq!(map.get(&IndicatorKind::Sma(20)), None);
        assert_eq!(map.get(&IndicatorKind::Rsi(14)), Some(&"rsi14"));
    }
}

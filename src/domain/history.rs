//! Raw history normalization.
//!
//! The inbound payload is a date-keyed map of string-valued OHLCV records
//! (the upstream API encodes every number as a string). Normalization turns
//! it into an index-addressed [`Bar`] sequence: indices are contiguous from
//! 0 in the iteration order of the history keys, which the fetch stage
//! guarantees to be date-ascending.

use crate::domain::error::EngineError;
use crate::domain::ohlcv::Bar;
use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// One history entry as delivered by the upstream API: OHLC plus volume,
/// all encoded as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOhlcv {
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
}

/// A fetched price history for one symbol, before normalization.
///
/// `history` keeps the payload's own key order; bar indices are assigned
/// from it, so it must never be re-sorted here.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHistory {
    pub name: String,
    #[serde(deserialize_with = "ordered_entries")]
    pub history: Vec<(String, RawOhlcv)>,
}

/// Deserializes a JSON object into a Vec of its entries, preserving the
/// order in which the keys appear in the document.
fn ordered_entries<'de, D>(deserializer: D) -> Result<Vec<(String, RawOhlcv)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, RawOhlcv)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a date-keyed map of OHLCV records")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, RawOhlcv>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

fn parse_field(date: &str, field: &'static str, value: &str) -> Result<f64, EngineError> {
    // str::parse::<f64> accepts "NaN" and "inf"; a non-finite price would
    // silently poison every rolling sum downstream, so reject it here.
    let parsed = value.parse::<f64>().ok().filter(|v| v.is_finite());
    parsed.ok_or_else(|| EngineError::Parse {
        date: date.to_string(),
        field,
        value: value.to_string(),
    })
}

impl RawHistory {
    /// Normalizes the history into bars with `index = 0..n-1` in key order.
    ///
    /// Fails on the first field that does not parse to a finite number.
    /// An empty history is not an error: it yields an empty Vec.
    pub fn to_bars(&self) -> Result<Vec<Bar>, EngineError> {
        let mut bars = Vec::with_capacity(self.history.len());
        for (index, (date, record)) in self.history.iter().enumerate() {
            bars.push(Bar {
                index,
                open: parse_field(date, "open", &record.open)?,
                high: parse_field(date, "high", &record.high)?,
                low: parse_field(date, "low", &record.low)?,
                close: parse_field(date, "close", &record.close)?,
                volume: parse_field(date, "volume", &record.volume)?,
            });
        }
        Ok(bars)
    }

    /// Parses the `YYYY-MM-DD` history keys so a renderer can map bar
    /// indices back to calendar dates. Position i corresponds to bar i.
    pub fn date_axis(&self) -> Result<Vec<NaiveDate>, EngineError> {
        self.history
            .iter()
            .map(|(date, _)| {
                NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| EngineError::Parse {
                    date: date.clone(),
                    field: "date",
                    value: date.clone(),
                })
            })
            .collect()
    }
}

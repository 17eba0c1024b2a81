//! Price bar models.
//!
//! The host delivers history as a sequence of [`BarSet`]s, oldest first. Each set
//! holds one interval's [`Bar`] for every tracked ticker.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One interval's open/high/low/close/volume record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Label of the interval as sent by the host (e.g. "2024-03-01 00:00:00").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

impl Bar {
    pub fn new(open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date: None,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Builds a bar where every price field equals `close`.
    ///
    /// Convenient for feeds that only publish closing prices.
    pub fn from_close(close: f64) -> Self {
        Self::new(close, close, close, close, 0.0)
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn get_close(&self) -> f64 {
        self.close
    }

    pub fn get_date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// Bars for a single interval, keyed by ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BarSet {
    bars: HashMap<String, Bar>,
}

impl BarSet {
    pub fn new() -> Self {
        Self {
            bars: HashMap::new(),
        }
    }

    /// Shorthand for a set holding a single ticker.
    pub fn single(ticker: impl Into<String>, bar: Bar) -> Self {
        let mut set = Self::new();
        set.insert(ticker, bar);
        set
    }

    pub fn insert(&mut self, ticker: impl Into<String>, bar: Bar) {
        self.bars.insert(ticker.into(), bar);
    }

    pub fn get(&self, ticker: &str) -> Option<&Bar> {
        self.bars.get(ticker)
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Bar)> {
        self.bars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_set_lookup() {
        let set = BarSet::single("VOO", Bar::from_close(410.5).with_date("2024-03-01"));

        let bar = set.get("VOO").unwrap();
        assert_eq!(bar.get_close(), 410.5);
        assert_eq!(bar.get_date(), Some("2024-03-01"));
        assert!(set.get("SPY").is_none());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_bar_set_deserializes_from_ticker_map() {
        let json = r#"{"VOO": {"open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5, "volume": 1000}}"#;
        let set: BarSet = serde_json::from_str(json).unwrap();

        let bar = set.get("VOO").unwrap();
        assert_eq!(bar.close, 1.5);
        assert_eq!(bar.volume, 1000.0);
        assert!(bar.date.is_none());
    }
}

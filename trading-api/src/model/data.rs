//! The payload a host passes to [`Strategist::run`](crate::Strategist::run).

use crate::error::{Result, TradingError};
use crate::model::bar::BarSet;
use crate::model::holdings::Holdings;
use serde::{Deserialize, Serialize};

/// An auxiliary data feed a strategy asks the host for, beyond price bars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRequest {
    name: String,
}

impl DataRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }
}

/// Everything available to a strategy on one invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyData {
    /// Current holdings, read-only.
    #[serde(default)]
    pub holdings: Holdings,
    /// Bar history, oldest first. The last entry is the current interval.
    #[serde(default)]
    pub ohlcv: Vec<BarSet>,
}

impl StrategyData {
    pub fn new(holdings: Holdings, ohlcv: Vec<BarSet>) -> Self {
        Self { holdings, ohlcv }
    }

    pub fn get_holdings(&self) -> &Holdings {
        &self.holdings
    }

    pub fn get_ohlcv(&self) -> &[BarSet] {
        &self.ohlcv
    }

    /// Number of intervals in the history window.
    pub fn len(&self) -> usize {
        self.ohlcv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ohlcv.is_empty()
    }

    /// Close of `ticker` `offset` intervals back from the latest one.
    ///
    /// `offset == 0` is the current interval.
    pub fn close_at(&self, ticker: &str, offset: usize) -> Result<f64> {
        let missing = || TradingError::MissingBar {
            ticker: ticker.to_string(),
            offset,
        };
        let index = self
            .ohlcv
            .len()
            .checked_sub(offset + 1)
            .ok_or_else(missing)?;
        self.ohlcv[index]
            .get(ticker)
            .map(|bar| bar.get_close())
            .ok_or_else(missing)
    }
}

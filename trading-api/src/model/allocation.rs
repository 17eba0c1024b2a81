use crate::error::{Result, TradingError};
use crate::model::holdings::Holdings;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents the desired holding per ticker.
/// This is what a strategy hands back to the host, which turns it into trades.
/// An empty allocation means "no change requested".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetAllocation {
    targets: HashMap<String, f64>,
}

impl TargetAllocation {
    pub fn new() -> Self {
        Self {
            targets: HashMap::new(),
        }
    }

    /// Sets the target for `ticker`, replacing any previous value.
    ///
    /// Unlike a position book, a zero target is kept: it tells the host to
    /// flatten the position.
    pub fn try_insert(&mut self, ticker: impl Into<String>, quantity: f64) -> Result<()> {
        let ticker = ticker.into();
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(TradingError::InvalidQuantity { ticker, quantity });
        }
        self.targets.insert(ticker, quantity);
        Ok(())
    }

    pub fn get(&self, ticker: &str) -> Option<f64> {
        self.targets.get(ticker).copied()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.targets.iter()
    }

    /// Holdings the host would report once every target has been realised.
    ///
    /// Tickers without a target keep their current quantity.
    pub fn realize(&self, current: &Holdings) -> Holdings {
        let mut next = current.clone();
        for (ticker, quantity) in &self.targets {
            next.set(ticker.clone(), *quantity);
        }
        next
    }
}

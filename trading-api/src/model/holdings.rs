use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Quantities currently held per ticker, as reported by the host.
///
/// Strategies only read this; the host owns the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Holdings {
    quantities: HashMap<String, f64>,
}

impl Holdings {
    pub fn new() -> Self {
        Self {
            quantities: HashMap::new(),
        }
    }

    pub fn with_position(mut self, ticker: impl Into<String>, quantity: f64) -> Self {
        self.set(ticker, quantity);
        self
    }

    pub fn set(&mut self, ticker: impl Into<String>, quantity: f64) {
        self.quantities.insert(ticker.into(), quantity);
    }

    /// Returns the held quantity, or `None` if the ticker is not held at all.
    pub fn get(&self, ticker: &str) -> Option<f64> {
        self.quantities.get(ticker).copied()
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.quantities.contains_key(ticker)
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.quantities.iter()
    }
}

impl FromIterator<(String, f64)> for Holdings {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            quantities: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holdings_distinguish_absent_from_zero() {
        let holdings = Holdings::new().with_position("VOO", 0.0);

        assert_eq!(holdings.get("VOO"), Some(0.0));
        assert_eq!(holdings.get("SPY"), None);
        assert!(holdings.contains("VOO"));
    }
}

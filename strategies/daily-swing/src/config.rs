use serde::{Deserialize, Serialize};
use thiserror::Error;

fn default_ticker() -> String {
    "VOO".to_string()
}

fn default_account_value() -> f64 {
    100_000.0
}

fn default_drop_threshold_pct() -> f64 {
    -2.0
}

fn default_rise_threshold_pct() -> f64 {
    3.0
}

fn default_sell_quantity() -> f64 {
    0.25
}

fn default_buy_fraction() -> f64 {
    0.1
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Ticker must not be empty")]
    EmptyTicker,

    #[error("Account value must be positive and finite, got {0}")]
    InvalidAccountValue(f64),

    #[error("Sell quantity must be non-negative and finite, got {0}")]
    InvalidSellQuantity(f64),

    #[error("Buy fraction must be in (0, 1], got {0}")]
    InvalidBuyFraction(f64),

    #[error("Drop threshold {drop}% must be below rise threshold {rise}%")]
    InvertedThresholds { drop: f64, rise: f64 },
}

/// Parameters of the daily swing rule.
///
/// Every field has a default, so a partial file or an empty environment
/// yields the stock rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingConfig {
    /// The only ticker traded.
    #[serde(default = "default_ticker")]
    ticker: String,
    /// Assumed account value used to size buys. Not tracked against fills.
    #[serde(default = "default_account_value")]
    account_value: f64,
    /// Day-over-day change (percent) below which the position is trimmed.
    #[serde(default = "default_drop_threshold_pct")]
    drop_threshold_pct: f64,
    /// Day-over-day change (percent) above which the position is added to.
    #[serde(default = "default_rise_threshold_pct")]
    rise_threshold_pct: f64,
    /// Absolute units removed on a drop.
    #[serde(default = "default_sell_quantity")]
    sell_quantity: f64,
    /// Share of `account_value` spent on a rise.
    #[serde(default = "default_buy_fraction")]
    buy_fraction: f64,
}

impl Default for SwingConfig {
    fn default() -> Self {
        Self {
            ticker: default_ticker(),
            account_value: default_account_value(),
            drop_threshold_pct: default_drop_threshold_pct(),
            rise_threshold_pct: default_rise_threshold_pct(),
            sell_quantity: default_sell_quantity(),
            buy_fraction: default_buy_fraction(),
        }
    }
}

impl SwingConfig {
    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = ticker.into();
        self
    }

    pub fn with_account_value(mut self, account_value: f64) -> Self {
        self.account_value = account_value;
        self
    }

    pub fn with_thresholds(mut self, drop_pct: f64, rise_pct: f64) -> Self {
        self.drop_threshold_pct = drop_pct;
        self.rise_threshold_pct = rise_pct;
        self
    }

    pub fn with_sell_quantity(mut self, quantity: f64) -> Self {
        self.sell_quantity = quantity;
        self
    }

    pub fn with_buy_fraction(mut self, fraction: f64) -> Self {
        self.buy_fraction = fraction;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ticker.trim().is_empty() {
            return Err(ConfigError::EmptyTicker);
        }
        if !self.account_value.is_finite() || self.account_value <= 0.0 {
            return Err(ConfigError::InvalidAccountValue(self.account_value));
        }
        if !self.sell_quantity.is_finite() || self.sell_quantity < 0.0 {
            return Err(ConfigError::InvalidSellQuantity(self.sell_quantity));
        }
        if !(self.buy_fraction > 0.0 && self.buy_fraction <= 1.0) {
            return Err(ConfigError::InvalidBuyFraction(self.buy_fraction));
        }
        if !(self.drop_threshold_pct < self.rise_threshold_pct) {
            return Err(ConfigError::InvertedThresholds {
                drop: self.drop_threshold_pct,
                rise: self.rise_threshold_pct,
            });
        }
        Ok(())
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn account_value(&self) -> f64 {
        self.account_value
    }

    pub fn drop_threshold_pct(&self) -> f64 {
        self.drop_threshold_pct
    }

    pub fn rise_threshold_pct(&self) -> f64 {
        self.rise_threshold_pct
    }

    pub fn sell_quantity(&self) -> f64 {
        self.sell_quantity
    }

    pub fn buy_fraction(&self) -> f64 {
        self.buy_fraction
    }
}

use crate::config::{ConfigError, SwingConfig};
use crate::signal::{percentage_change, Signal};
use log::{debug, info, warn};
use trading::prelude::*;

/// Single-ticker strategy trading on the last day-over-day close change.
///
/// Holds no state between calls beyond its configuration.
#[derive(Debug, Clone, Default)]
pub struct DailySwing {
    config: SwingConfig,
}

impl DailySwing {
    /// Creates the strategy with the stock parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the strategy with custom parameters.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by [`SwingConfig::validate`].
    pub fn with_config(config: SwingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn get_config(&self) -> &SwingConfig {
        &self.config
    }

    /// Target quantity for a classified change, floored at zero.
    ///
    /// # Arguments
    ///
    /// * `signal` - Direction chosen from the day-over-day change.
    /// * `held` - Current holding, `None` if the ticker is not held.
    /// * `today_close` - Latest close, used to size buys.
    pub fn target_quantity(&self, signal: Signal, held: Option<f64>, today_close: f64) -> f64 {
        let held = held.unwrap_or(0.0);
        let target = match signal {
            Signal::Sell => held - self.config.sell_quantity(),
            Signal::Buy => held + self.buy_quantity(today_close),
            Signal::Hold => held,
        };
        target.max(0.0)
    }

    /// Units bought on a rise: a fixed share of the assumed account value.
    pub fn buy_quantity(&self, today_close: f64) -> f64 {
        self.config.buy_fraction() * self.config.account_value() / today_close
    }
}

impl Initiable for DailySwing {
    fn init() -> Self {
        Self::new()
    }
}

impl Strategist for DailySwing {
    fn interval(&self) -> Interval {
        Interval::OneDay
    }

    fn assets(&self) -> Vec<String> {
        vec![self.config.ticker().to_string()]
    }

    fn data(&self) -> Vec<DataRequest> {
        Vec::new()
    }

    fn run(&mut self, data: &StrategyData) -> TargetAllocation {
        if data.len() < 2 {
            info!("Not enough data: {} bar(s), need 2", data.len());
            return TargetAllocation::new();
        }

        let ticker = self.config.ticker();
        let closes = (data.close_at(ticker, 1), data.close_at(ticker, 0));
        let (previous_close, today_close) = match closes {
            (Ok(previous), Ok(today)) => (previous, today),
            (Err(e), _) | (_, Err(e)) => {
                warn!("{}; leaving allocation unchanged", e);
                return TargetAllocation::new();
            }
        };

        let change = percentage_change(previous_close, today_close);
        debug!(
            "{}: close {} -> {} ({:.4}%)",
            ticker, previous_close, today_close, change
        );

        let signal = Signal::classify(
            change,
            self.config.drop_threshold_pct(),
            self.config.rise_threshold_pct(),
        );
        match signal {
            Signal::Sell => info!(
                "Price dropped more than {}%, selling {} units of {}",
                -self.config.drop_threshold_pct(),
                self.config.sell_quantity(),
                ticker
            ),
            Signal::Buy => info!(
                "Price increased by more than {}%, buying {}% of account value",
                self.config.rise_threshold_pct(),
                self.config.buy_fraction() * 100.0
            ),
            Signal::Hold => info!("No significant price change, maintaining current holdings"),
        }

        let held = data.get_holdings().get(ticker);
        let target = self.target_quantity(signal, held, today_close);

        let mut allocation = TargetAllocation::new();
        if let Err(e) = allocation.try_insert(ticker, target) {
            warn!("{}; leaving allocation unchanged", e);
            return TargetAllocation::new();
        }
        allocation
    }
}

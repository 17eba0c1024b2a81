use crate::model::{
    allocation::TargetAllocation,
    data::{DataRequest, StrategyData},
    interval::Interval,
};

/// The callback contract between the host framework and a strategy.
///
/// The host reads `interval`, `assets` and `data` once to decide what to feed,
/// then calls `run` on every new interval.
pub trait Strategist: Send {
    /// Sampling interval the strategy wants its bars at.
    fn interval(&self) -> Interval;

    /// Tickers the host must supply bars and holdings for.
    fn assets(&self) -> Vec<String>;

    /// Auxiliary data feeds required beyond price bars.
    fn data(&self) -> Vec<DataRequest>;

    /// Called when the host has a new interval of data.
    ///
    /// # Arguments
    ///
    /// * `data` - Current holdings and the bar history, oldest first.
    ///
    /// # Returns
    ///
    /// * `TargetAllocation` - The desired holdings. Empty means no change.
    fn run(&mut self, data: &StrategyData) -> TargetAllocation;
}

impl Strategist for Box<dyn Strategist> {
    fn interval(&self) -> Interval {
        (**self).interval()
    }

    fn assets(&self) -> Vec<String> {
        (**self).assets()
    }

    fn data(&self) -> Vec<DataRequest> {
        (**self).data()
    }

    fn run(&mut self, data: &StrategyData) -> TargetAllocation {
        (**self).run(data)
    }
}

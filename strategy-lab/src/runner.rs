//! Drives a strategy the way the host would.

use log::info;
use serde::Serialize;
use trading::{DataFeed, DataRequest, Holdings, Interval, Strategist, StrategyData, TargetAllocation};

use crate::feed::ReplayFeed;

/// What a strategy asks the host for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Description {
    pub interval: Interval,
    pub assets: Vec<String>,
    pub data: Vec<DataRequest>,
}

/// Outcome of one replayed interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    /// 1-based interval number.
    pub step: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Latest close of the strategy's first asset, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<f64>,
    pub target: TargetAllocation,
    /// Holdings after the target was realised.
    pub holdings: Holdings,
}

pub fn describe<S: Strategist>(strategy: &S) -> Description {
    Description {
        interval: strategy.interval(),
        assets: strategy.assets(),
        data: strategy.data(),
    }
}

/// Runs a single invocation.
pub fn evaluate<S: Strategist>(strategy: &mut S, data: &StrategyData) -> TargetAllocation {
    info!(
        "Evaluating {} bar(s) with {} holding(s)",
        data.len(),
        data.get_holdings().iter().count()
    );
    strategy.run(data)
}

/// Replays the whole feed, realising each target before the next interval.
pub fn replay<S: Strategist>(strategy: &mut S, feed: &mut ReplayFeed) -> Vec<ReplayStep> {
    let primary = strategy.assets().into_iter().next();
    let mut steps = Vec::with_capacity(feed.len());

    while let Some(data) = feed.next_data() {
        let target = strategy.run(&data);
        feed.apply(&target);

        let latest = primary
            .as_deref()
            .and_then(|ticker| data.get_ohlcv().last().and_then(|set| set.get(ticker)));

        steps.push(ReplayStep {
            step: feed.position(),
            date: latest.and_then(|bar| bar.get_date().map(str::to_string)),
            close: latest.map(|bar| bar.get_close()),
            target,
            holdings: feed.get_holdings().clone(),
        });
    }

    info!("Replayed {} interval(s)", steps.len());
    steps
}

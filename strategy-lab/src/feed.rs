//! Replays a stored bar history as successive strategy payloads.

use log::debug;
use trading::{BarSet, DataFeed, Holdings, StrategyData, TargetAllocation};

/// Feeds a growing window of a fixed history, one interval per call.
///
/// Holdings start from the supplied snapshot and only change through
/// [`ReplayFeed::apply`]: the feed assumes each target is realised exactly,
/// with no cash, fees or partial fills.
pub struct ReplayFeed {
    history: Vec<BarSet>,
    holdings: Holdings,
    cursor: usize,
}

impl ReplayFeed {
    pub fn new(history: Vec<BarSet>, holdings: Holdings) -> Self {
        Self {
            history,
            holdings,
            cursor: 0,
        }
    }

    /// Records the host realising `target` before the next interval.
    pub fn apply(&mut self, target: &TargetAllocation) {
        if !target.is_empty() {
            self.holdings = target.realize(&self.holdings);
        }
    }

    pub fn get_holdings(&self) -> &Holdings {
        &self.holdings
    }

    /// Number of intervals already handed out.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl DataFeed for ReplayFeed {
    fn next_data(&mut self) -> Option<StrategyData> {
        if self.cursor >= self.history.len() {
            return None;
        }
        self.cursor += 1;
        debug!("Replaying interval {}/{}", self.cursor, self.history.len());
        Some(StrategyData::new(
            self.holdings.clone(),
            self.history[..self.cursor].to_vec(),
        ))
    }
}

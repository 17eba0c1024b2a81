//! Defines the `DataFeed` trait for supplying strategy invocations.
//!
//! A feed stands in for the host's data side: it yields successive
//! `StrategyData` payloads, each with the holdings and bar window a strategy
//! would see on that interval.

use crate::model::data::StrategyData;

/// A trait for components that produce strategy payloads.
///
/// # Examples
///
/// ```
/// use trading::traits::data_feed::DataFeed;
/// use trading::model::data::StrategyData;
///
/// struct MyFeed;
///
/// impl DataFeed for MyFeed {
///     fn next_data(&mut self) -> Option<StrategyData> {
///         // Fetch data...
///         None
///     }
/// }
/// ```
pub trait DataFeed {
    /// Retrieves the payload for the next interval.
    ///
    /// Returns `None` once the feed is exhausted.
    fn next_data(&mut self) -> Option<StrategyData>;
}

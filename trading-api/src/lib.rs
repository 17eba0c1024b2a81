pub mod error;
pub mod macros;
pub mod model;
pub mod traits;

pub use error::{Result, TradingError};
pub use model::allocation::TargetAllocation;
pub use model::bar::{Bar, BarSet};
pub use model::data::{DataRequest, StrategyData};
pub use model::holdings::Holdings;
pub use model::interval::Interval;
pub use traits::data_feed::DataFeed;
pub use traits::initiable::Initiable;
pub use traits::strategist::Strategist;

pub mod prelude {
    pub use crate::export_strategy;
    pub use crate::model::allocation::TargetAllocation;
    pub use crate::model::bar::{Bar, BarSet};
    pub use crate::model::data::{DataRequest, StrategyData};
    pub use crate::model::holdings::Holdings;
    pub use crate::model::interval::Interval;
    pub use crate::traits::initiable::Initiable;
    pub use crate::traits::strategist::Strategist;
}

//! # Daily swing strategy
//!
//! Compares the last two daily closes of a single ticker and moves the target
//! holding accordingly:
//!
//! - a drop of more than 2% trims the position by a fixed 0.25 units,
//! - a rise of more than 3% buys 10% of an assumed account value,
//! - anything in between keeps the current holding.
//!
//! Thresholds, ticker and account value come from [`SwingConfig`]; the
//! defaults reproduce the rule above for `VOO` on a 100,000 account.
//!
//! ```
//! use daily_swing::DailySwing;
//! use trading::prelude::*;
//!
//! let mut strategy = DailySwing::new();
//! let data = StrategyData::new(
//!     Holdings::new().with_position("VOO", 50.0),
//!     vec![
//!         BarSet::single("VOO", Bar::from_close(95.0)),
//!         BarSet::single("VOO", Bar::from_close(100.0)),
//!     ],
//! );
//!
//! let target = strategy.run(&data);
//! assert_eq!(target.get("VOO"), Some(150.0));
//! ```

pub mod config;
pub mod signal;
pub mod strategy;

pub use config::{ConfigError, SwingConfig};
pub use signal::{percentage_change, Signal};
pub use strategy::DailySwing;

trading::export_strategy!(DailySwing);

use serde::{Deserialize, Serialize};

/// Day-over-day change of a close, in percent.
///
/// A zero `previous` close is not guarded: the result follows IEEE-754
/// division (infinite, or NaN when both closes are zero).
pub fn percentage_change(previous: f64, today: f64) -> f64 {
    (today - previous) / previous * 100.0
}

/// Which way the rule moves the target holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    /// Change fell below the drop threshold.
    Sell,
    /// Change rose above the rise threshold.
    Buy,
    /// Anything else, including a NaN change.
    Hold,
}

impl Signal {
    /// Classifies a percentage change against the two thresholds.
    ///
    /// Both bounds are exclusive: a change exactly at a threshold holds.
    pub fn classify(change_pct: f64, drop_threshold_pct: f64, rise_threshold_pct: f64) -> Self {
        if change_pct < drop_threshold_pct {
            Signal::Sell
        } else if change_pct > rise_threshold_pct {
            Signal::Buy
        } else {
            Signal::Hold
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_change() {
        assert!((percentage_change(100.0, 97.0) + 3.0).abs() < 1e-9);
        assert!((percentage_change(95.0, 100.0) - 5.263157894736842).abs() < 1e-9);
        assert_eq!(percentage_change(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_classify_bounds_are_exclusive() {
        assert_eq!(Signal::classify(-3.0, -2.0, 3.0), Signal::Sell);
        assert_eq!(Signal::classify(-2.0, -2.0, 3.0), Signal::Hold);
        assert_eq!(Signal::classify(1.0, -2.0, 3.0), Signal::Hold);
        assert_eq!(Signal::classify(3.0, -2.0, 3.0), Signal::Hold);
        assert_eq!(Signal::classify(5.0, -2.0, 3.0), Signal::Buy);
    }

    #[test]
    fn test_nan_change_holds() {
        assert_eq!(Signal::classify(f64::NAN, -2.0, 3.0), Signal::Hold);
    }
}

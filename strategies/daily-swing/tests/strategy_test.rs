use daily_swing::{entry_point, DailySwing, SwingConfig};
use trading::prelude::*;

fn closes(values: &[f64]) -> Vec<BarSet> {
    values
        .iter()
        .map(|c| BarSet::single("VOO", Bar::from_close(*c)))
        .collect()
}

fn run_default(holdings: Holdings, history: &[f64]) -> TargetAllocation {
    let mut strategy = entry_point();
    strategy.run(&StrategyData::new(holdings, closes(history)))
}

#[test]
fn test_insufficient_history_is_empty() {
    let holdings_cases = vec![
        Holdings::new(),
        Holdings::new().with_position("VOO", 10.0),
        Holdings::new().with_position("BND", 3.0),
    ];

    for holdings in holdings_cases {
        assert!(run_default(holdings.clone(), &[]).is_empty());
        assert!(run_default(holdings, &[100.0]).is_empty());
    }
}

#[test]
fn test_drop_trims_fixed_quantity() {
    let target = run_default(Holdings::new().with_position("VOO", 10.0), &[100.0, 97.0]);

    assert_eq!(target.len(), 1);
    assert_eq!(target.get("VOO"), Some(9.75));
}

#[test]
fn test_drop_without_holding_targets_zero() {
    let target = run_default(Holdings::new(), &[100.0, 97.0]);

    assert_eq!(target.len(), 1);
    assert_eq!(target.get("VOO"), Some(0.0));
}

#[test]
fn test_rise_buys_share_of_account_value() {
    let target = run_default(Holdings::new(), &[100.0 / 1.05, 100.0]);
    let quantity = target.get("VOO").unwrap();

    assert!((quantity - 100.0).abs() < 1e-9, "Expected 100 VOO, got {}", quantity);
}

#[test]
fn test_rise_adds_to_existing_holding() {
    let target = run_default(
        Holdings::new().with_position("VOO", 50.0),
        &[100.0 / 1.05, 100.0],
    );
    let quantity = target.get("VOO").unwrap();

    assert!((quantity - 150.0).abs() < 1e-9, "Expected 150 VOO, got {}", quantity);
}

#[test]
fn test_small_move_keeps_holding() {
    let target = run_default(Holdings::new().with_position("VOO", 20.0), &[100.0, 101.0]);
    assert_eq!(target.get("VOO"), Some(20.0));

    let target = run_default(Holdings::new(), &[100.0, 101.0]);
    assert_eq!(target.get("VOO"), Some(0.0));
}

#[test]
fn test_only_last_two_bars_matter() {
    // A crash earlier in the window must not influence today's decision
    let target = run_default(
        Holdings::new().with_position("VOO", 20.0),
        &[200.0, 100.0, 100.5],
    );
    assert_eq!(target.get("VOO"), Some(20.0));
}

#[test]
fn test_other_holdings_are_not_touched() {
    let holdings = Holdings::new()
        .with_position("VOO", 10.0)
        .with_position("BND", 3.0);
    let target = run_default(holdings, &[100.0, 97.0]);

    assert_eq!(target.len(), 1);
    assert!(target.get("BND").is_none());
}

#[test]
fn test_missing_ticker_bar_is_empty() {
    let mut strategy = DailySwing::new();
    let ohlcv = vec![
        BarSet::single("SPY", Bar::from_close(100.0)),
        BarSet::single("VOO", Bar::from_close(97.0)),
    ];

    let target = strategy.run(&StrategyData::new(Holdings::new(), ohlcv));
    assert!(target.is_empty());
}

#[test]
fn test_allocation_never_negative() {
    let prices = [0.5, 1.0, 50.0, 97.0, 100.0, 103.5, 250.0];
    let held = [None, Some(0.0), Some(0.1), Some(0.25), Some(10.0), Some(-5.0)];
    let mut strategy = DailySwing::new();

    for previous in prices {
        for today in prices {
            for quantity in held {
                let mut holdings = Holdings::new();
                if let Some(q) = quantity {
                    holdings.set("VOO", q);
                }
                let data = StrategyData::new(holdings, closes(&[previous, today]));
                let target = strategy.run(&data);

                for (_, value) in target.iter() {
                    assert!(
                        *value >= 0.0,
                        "Negative target {} for {} -> {} with {:?}",
                        value,
                        previous,
                        today,
                        quantity
                    );
                }
            }
        }
    }
}

#[test]
fn test_custom_config_changes_ticker_and_sizing() {
    let config = SwingConfig::default()
        .with_ticker("SPY")
        .with_account_value(20_000.0);
    let mut strategy = DailySwing::with_config(config).unwrap();
    let ohlcv = vec![
        BarSet::single("SPY", Bar::from_close(90.0)),
        BarSet::single("SPY", Bar::from_close(100.0)),
    ];

    let target = strategy.run(&StrategyData::new(Holdings::new(), ohlcv));
    let quantity = target.get("SPY").unwrap();
    assert!((quantity - 20.0).abs() < 1e-9);
    assert!(target.get("VOO").is_none());
}

#[test]
fn test_run_from_host_json_payload() {
    let payload = r#"{
        "holdings": {"VOO": 10},
        "ohlcv": [
            {"VOO": {"date": "2024-03-01 00:00:00", "open": 101, "high": 102, "low": 99, "close": 100, "volume": 5000}},
            {"VOO": {"date": "2024-03-04 00:00:00", "open": 99, "high": 99, "low": 96, "close": 97, "volume": 7000}}
        ]
    }"#;
    let data: StrategyData = serde_json::from_str(payload).unwrap();

    let target = entry_point().run(&data);
    assert_eq!(serde_json::to_string(&target).unwrap(), r#"{"VOO":9.75}"#);
}

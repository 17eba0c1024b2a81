use anyhow::{Context, Result};
use clap::Parser;
use daily_swing::DailySwing;
use log::info;
use serde::Serialize;
use std::io::Write;
use strategy_lab::{
    args::{Cli, Commands},
    feed::ReplayFeed,
    io::read_json,
    runner, settings,
};
use trading::{BarSet, Holdings, StrategyData};

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(std::io::stdout().lock(), "{}", encoded)?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = settings::load_settings(cli.config.as_deref())
        .context("Failed to load strategy settings")?;
    info!(
        "Starting Strategy Lab: daily swing on {} (account value {})",
        config.ticker(),
        config.account_value()
    );
    let mut strategy = DailySwing::with_config(config)?;

    match &cli.command {
        Commands::Describe => {
            print_json(&runner::describe(&strategy), cli.pretty)?;
        }
        Commands::Run { input } => {
            let data: StrategyData = read_json(input)?;
            let target = runner::evaluate(&mut strategy, &data);
            print_json(&target, cli.pretty)?;
        }
        Commands::Replay { history, holdings } => {
            let bars: Vec<BarSet> = read_json(history)?;
            let start = match holdings {
                Some(path) => read_json::<Holdings>(path)?,
                None => Holdings::new(),
            };
            let mut feed = ReplayFeed::new(bars, start);
            for step in runner::replay(&mut strategy, &mut feed) {
                print_json(&step, cli.pretty)?;
            }
        }
    }

    Ok(())
}

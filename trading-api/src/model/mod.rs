//! Data exchanged between the host framework and a strategy.
//!
//! # Submodules
//! - [`bar`]: OHLCV records and the per-interval [`BarSet`](bar::BarSet).
//! - [`holdings`]: quantities currently held, as reported by the host.
//! - [`allocation`]: the target a strategy hands back.
//! - [`data`]: the payload passed on each invocation.
//! - [`interval`]: sampling intervals a strategy can request.

pub mod allocation;
pub mod bar;
pub mod data;
pub mod holdings;
pub mod interval;

//! # Strategy Lab
//!
//! A local stand-in for the host framework. It loads strategy settings, reads
//! host-shaped JSON payloads and calls the strategy exactly as the host would.
//!
//! ## Modules
//! - `args`: command-line parsing.
//! - `settings`: layered settings (defaults, file, environment).
//! - `io`: JSON inputs from files or stdin.
//! - `feed`: replay of a stored bar history.
//! - `runner`: single evaluation, replay and description.

pub mod args;
pub mod error;
pub mod feed;
pub mod io;
pub mod runner;
pub mod settings;

pub use error::{LabError, Result};

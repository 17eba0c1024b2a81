//! Layered strategy settings.
//!
//! Sources, lowest priority first: the serde defaults of [`SwingConfig`], an
//! optional settings file, then environment variables
//! (`STRATEGY_LAB_ACCOUNT_VALUE=50000`).

use crate::error::Result;
use config::{Config, Environment, File};
use daily_swing::SwingConfig;
use log::debug;
use std::path::Path;

pub const ENV_PREFIX: &str = "STRATEGY_LAB";

/// Loads settings with the standard environment prefix.
pub fn load_settings(path: Option<&Path>) -> Result<SwingConfig> {
    load_settings_with_prefix(path, ENV_PREFIX)
}

/// Loads settings, reading overrides from `<prefix>_*` environment variables.
///
/// The result is validated before it is returned.
pub fn load_settings_with_prefix(path: Option<&Path>, prefix: &str) -> Result<SwingConfig> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        debug!("Loading settings from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let settings: SwingConfig = builder
        .add_source(Environment::with_prefix(prefix).try_parsing(true))
        .build()?
        .try_deserialize()?;

    settings.validate()?;
    Ok(settings)
}

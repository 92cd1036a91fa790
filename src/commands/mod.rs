//! Command handlers for the `swatch` binary

pub mod ls;
pub mod preview;
pub mod resolve;
pub mod serve;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use swatch::config::ConfigWarning;
use swatch::{Config, ContentDispatcher};

/// Load configuration: explicit `--config`, then `./swatch.toml`, then the
/// user config or defaults. Environment overrides apply in every case.
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = Config::load_with_warnings(path)?;
        return Ok((config.with_env_overrides(), warnings));
    }

    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    Ok(Config::load_layered(&cwd)?)
}

/// Build a dispatcher, letting `--snapshot` override the configured store.
pub fn dispatcher_for(mut config: Config, snapshot: Option<PathBuf>) -> Result<ContentDispatcher> {
    if snapshot.is_some() {
        config.store.snapshot = snapshot;
    }
    Ok(swatch::presentation::create_dispatcher(&config)?)
}

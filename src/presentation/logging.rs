//! Tracing setup
//!
//! Logs go to stderr so `preview` output on stdout stays clean. `RUST_LOG`
//! wins over both the configured filter and `-v`.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(config: &LoggingConfig, verbose: u8) -> String {
    match verbose {
        0 => config.filter.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init(config: &LoggingConfig, verbose: u8) -> Result<()> {
    let directive = default_directive(config, verbose);
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&directive))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}

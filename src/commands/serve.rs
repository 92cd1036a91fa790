//! Serve command handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use swatch::Config;

pub fn cmd_serve(mut config: Config, bind: Option<String>, snapshot: Option<PathBuf>) -> Result<()> {
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    let addr = config.bind_addr()?;
    let dispatcher = super::dispatcher_for(config, snapshot)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(swatch::presentation::serve(dispatcher, addr))
}

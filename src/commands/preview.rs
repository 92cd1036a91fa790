//! Preview command handler
//!
//! Prints exactly what the HTTP API would deliver for one file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use swatch::{Config, DeliveryMode, ThemeId};

pub fn cmd_preview(
    config: Config,
    theme: &str,
    path: &str,
    snapshot: Option<PathBuf>,
    raw: bool,
    explain: bool,
) -> Result<()> {
    let dispatcher = super::dispatcher_for(config, snapshot)?;
    let mode = if raw {
        DeliveryMode::Raw
    } else {
        DeliveryMode::Preview
    };

    let delivery = dispatcher.dispatch(mode, &ThemeId::from(theme), path)?;

    if explain {
        let mut err = std::io::stderr().lock();
        writeln!(err, "mode:          {}", mode.as_str())?;
        writeln!(err, "content-type:  {}", delivery.content_type.header_value())?;
        writeln!(err, "cache-control: {}", delivery.cache.header_value())?;
        writeln!(err, "etag:          {}", delivery.etag.etag())?;
        if !delivery.references.is_empty() {
            writeln!(err, "references:")?;
            for reference in &delivery.references {
                writeln!(err, "  {} -> {}", reference.original, reference.resolved)?;
            }
        }
        writeln!(err)?;
    }

    let mut out = std::io::stdout().lock();
    out.write_all(delivery.body.as_bytes())?;
    if !delivery.body.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

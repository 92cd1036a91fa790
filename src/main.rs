//! Swatch CLI - theme storage and preview server
//!
//! Usage: swatch <COMMAND>
//!
//! Commands:
//!   serve    Serve themes over HTTP
//!   preview  Print one file as the server would deliver it
//!   resolve  Resolve a relative reference against a virtual path
//!   ls       List the files of a theme

use anyhow::Result;
use clap::Parser;

use swatch::presentation::{Cli, Commands};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, warnings) = commands::load_config(cli.config.as_deref())?;

    swatch::presentation::logging::init(&config.logging, cli.verbose)?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    match cli.command {
        Commands::Serve { bind, snapshot } => commands::serve::cmd_serve(config, bind, snapshot),
        Commands::Preview {
            theme,
            path,
            snapshot,
            raw,
            explain,
        } => commands::preview::cmd_preview(config, &theme, &path, snapshot, raw, explain),
        Commands::Resolve { current, reference } => {
            commands::resolve::cmd_resolve(&current, &reference)
        }
        Commands::Ls {
            theme,
            snapshot,
            json,
        } => commands::ls::cmd_ls(config, theme.as_deref(), snapshot, json),
    }
}

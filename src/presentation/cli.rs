//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - `--config` and `-v` are global and inherited by all subcommands
//! - `--snapshot` and `--bind` override the matching config keys

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Swatch - theme storage and preview server
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./swatch.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve themes over HTTP
    Serve {
        /// Listen address (host:port)
        #[arg(long)]
        bind: Option<String>,

        /// JSON theme snapshot to serve
        #[arg(long, value_name = "FILE")]
        snapshot: Option<PathBuf>,
    },

    /// Print one file as the server would deliver it
    Preview {
        /// Theme id (e.g. THEME-001)
        theme: String,

        /// Virtual path within the theme
        path: String,

        /// JSON theme snapshot to read from
        #[arg(long, value_name = "FILE")]
        snapshot: Option<PathBuf>,

        /// Raw delivery instead of preview
        #[arg(long)]
        raw: bool,

        /// Print headers and rewritten references to stderr
        #[arg(long)]
        explain: bool,
    },

    /// Resolve a relative reference against a virtual file path
    Resolve {
        /// Path of the referencing file (e.g. components/buttons.html)
        current: String,

        /// Reference as written in the file (e.g. ../mockups/script.js)
        reference: String,
    },

    /// List the files of a theme
    Ls {
        /// Theme id (omit to list theme ids)
        theme: Option<String>,

        /// JSON theme snapshot to read from
        #[arg(long, value_name = "FILE")]
        snapshot: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

//! Ls command handler

use std::path::PathBuf;

use anyhow::Result;

use swatch::{Config, ThemeId};

pub fn cmd_ls(config: Config, theme: Option<&str>, snapshot: Option<PathBuf>, json: bool) -> Result<()> {
    let dispatcher = super::dispatcher_for(config, snapshot)?;

    let Some(theme) = theme else {
        let ids = dispatcher.theme_ids()?;
        if json {
            println!("{}", serde_json::to_string_pretty(&ids)?);
        } else {
            for id in ids {
                println!("{}", id);
            }
        }
        return Ok(());
    };

    let files = dispatcher.list_files(&ThemeId::from(theme))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
        return Ok(());
    }

    for file in &files {
        println!(
            "{:>9}  {:<5}  {}  {}",
            file.size_bytes,
            file.file_type.as_str(),
            file.created_at.format("%Y-%m-%d %H:%M"),
            file.path
        );
    }
    println!("{} file(s)", files.len());
    Ok(())
}

//! Resolve command handler

use anyhow::Result;

use swatch::domain::services::{is_external_or_absolute, resolve};

pub fn cmd_resolve(current: &str, reference: &str) -> Result<()> {
    if is_external_or_absolute(reference) {
        println!("{} (absolute or external, left unchanged)", reference);
        return Ok(());
    }

    println!("{}", resolve(current, reference));
    Ok(())
}

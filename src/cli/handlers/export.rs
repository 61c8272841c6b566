use crate::web::render_atlas_page;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use super::CommandContext;

pub fn handle_export(ctx: &CommandContext, output: PathBuf, open_after: bool) -> Result<()> {
    let page = render_atlas_page(&ctx.resolved)?;
    std::fs::write(&output, page)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} {} memories to {}",
        "Exported".green(),
        ctx.store.list().len(),
        output.display()
    );

    if open_after {
        open::that(&output).with_context(|| format!("Failed to open {}", output.display()))?;
    }
    Ok(())
}

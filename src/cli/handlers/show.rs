use crate::error::AtlasError;
use crate::render::PinRenderer;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_memory;

pub fn handle_show(ctx: &CommandContext, id: i64, json: bool, html: bool) -> Result<()> {
    let memory = ctx.store.get(id).ok_or(AtlasError::NotFound(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&memory)?);
    } else if html {
        println!("{}", PinRenderer::new().render_html(&memory));
    } else {
        print_memory(&memory);
    }
    Ok(())
}

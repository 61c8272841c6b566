use anyhow::Result;

use super::CommandContext;
use super::utils::print_memory_list;

pub fn handle_list(ctx: &CommandContext, json: bool) -> Result<()> {
    let memories = ctx.store.list();

    if json {
        println!("{}", serde_json::to_string_pretty(&memories)?);
    } else {
        print_memory_list(&memories);
    }
    Ok(())
}

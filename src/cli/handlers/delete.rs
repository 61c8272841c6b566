use crate::controller::{AtlasController, AutoConfirm, Confirm};
use crate::map::LeafletMap;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::StdinConfirm;

pub fn handle_delete(ctx: CommandContext, id: i64, force: bool, json: bool) -> Result<()> {
    if ctx.store.get(id).is_none() {
        // Deleting something that is not there is a no-op, not a failure
        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "action": "none",
                    "id": id
                }))?
            );
        } else {
            println!("No memory with id {}", id.to_string().cyan());
        }
        return Ok(());
    }

    let map_settings = &ctx.resolved.config.map;
    let canvas = LeafletMap::new(map_settings.initial_view()?, map_settings.tile_layer());
    let mut controller = AtlasController::new(ctx.store, canvas);

    let mut confirm: Box<dyn Confirm> = if force || json {
        Box::new(AutoConfirm)
    } else {
        Box::new(StdinConfirm)
    };

    if !controller.request_delete(id, confirm.as_mut())? {
        println!("Cancelled.");
        return Ok(());
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "action": "deleted",
                "id": id
            }))?
        );
    } else {
        println!("{} {}", "Deleted".red(), id.to_string().cyan());
    }
    Ok(())
}

use crate::controller::AtlasController;
use crate::map::LeafletMap;
use crate::model::Coordinate;
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use super::utils::resolve_story;

/// Parameters for add operation
pub struct AddParams {
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub date: String,
    pub story: String,
    pub photo_url: String,
    pub json: bool,
}

pub fn handle_add(ctx: CommandContext, params: AddParams) -> Result<()> {
    let at = Coordinate::new(params.lat, params.lng)?;
    let story = resolve_story(params.story)?;

    let map_settings = &ctx.resolved.config.map;
    let canvas = LeafletMap::new(map_settings.initial_view()?, map_settings.tile_layer());
    let mut controller = AtlasController::new(ctx.store, canvas);

    // Same flow as a click on the map followed by the form
    controller.on_map_click(at);
    let fields = &mut controller.form_mut().fields;
    fields.title = params.title;
    fields.date = params.date;
    fields.story = story;
    fields.photo_url = params.photo_url;

    let memory = controller
        .submit_form()
        .context("Failed to save memory")?;

    if params.json {
        println!("{}", serde_json::to_string_pretty(&memory)?);
    } else {
        println!(
            "{} {} at {}",
            "Pinned".green(),
            memory.id.to_string().cyan(),
            memory.coordinate()
        );
    }
    Ok(())
}

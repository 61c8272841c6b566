use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use atlas::cli::handlers::{
    AddParams, CommandContext, handle_add, handle_delete, handle_export, handle_init,
    handle_list, handle_serve, handle_show, handle_tui,
};
use atlas::cli::{Cli, Commands};
use atlas::config::ResolvedConfig;
use atlas::logging::{self, LogTarget};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let target = match cli.command {
        Commands::Tui => LogTarget::FileOnly,
        _ => LogTarget::Stderr,
    };
    logging::init(cli.verbose, cli.log_file, target);

    let data_dir = cli.data_dir;

    match cli.command {
        Commands::Init { path } => handle_init(path),
        Commands::Add {
            lat,
            lng,
            title,
            date,
            story,
            photo_url,
            json,
        } => handle_add(
            load_context(data_dir)?,
            AddParams {
                lat,
                lng,
                title,
                date,
                story,
                photo_url,
                json,
            },
        ),
        Commands::List { json } => handle_list(&load_context(data_dir)?, json),
        Commands::Show { id, json, html } => handle_show(&load_context(data_dir)?, id, json, html),
        Commands::Delete { id, force, json } => {
            handle_delete(load_context(data_dir)?, id, force, json)
        }
        Commands::Export { output, open } => handle_export(&load_context(data_dir)?, output, open),
        Commands::Serve { port } => handle_serve(load_context(data_dir)?, port),
        Commands::Tui => handle_tui(load_context(data_dir)?),
    }
}

fn load_context(data_dir: Option<PathBuf>) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let resolved =
        ResolvedConfig::resolve(&cwd, data_dir).context("Failed to load atlas configuration")?;
    Ok(CommandContext::new(resolved))
}

use crate::web::run_server;
use anyhow::Result;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, port: u16) -> Result<()> {
    println!("Serving the atlas on http://localhost:{}", port);
    println!("Data: {}", ctx.resolved.data_dir.display());

    tokio::runtime::Runtime::new()?.block_on(run_server(ctx.resolved, port))?;
    Ok(())
}

mod add;
mod delete;
mod export;
mod init;
mod list;
mod serve;
mod show;
mod tui;
mod utils;

pub use add::{AddParams, handle_add};
pub use delete::handle_delete;
pub use export::handle_export;
pub use init::handle_init;
pub use list::handle_list;
pub use serve::handle_serve;
pub use show::handle_show;
pub use tui::handle_tui;

use crate::config::ResolvedConfig;
use crate::storage::{FileSlot, MemoryStore};
use crate::web::open_store;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub resolved: ResolvedConfig,
    pub store: MemoryStore<FileSlot>,
}

impl CommandContext {
    pub fn new(resolved: ResolvedConfig) -> Self {
        let store = open_store(&resolved);
        Self { resolved, store }
    }
}
